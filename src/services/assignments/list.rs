use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::{requests::AssignmentListQuery, responses::AssignmentListResponse};
use crate::models::{ApiResponse, ErrorCode, PaginationInfo};

pub async fn list_assignments(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 管理员可带过滤条件分页查全量
    if RequireJWT::is_admin(request) {
        return match storage.list_assignments_with_pagination(query).await {
            Ok(response) => Ok(HttpResponse::Ok()
                .json(ApiResponse::success(response, "Assignments retrieved successfully"))),
            Err(e) => {
                error!("Error listing assignments: {}", e);
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to list assignments",
                    )),
                )
            }
        };
    }

    // 普通员工只能看到分配给自己的任务
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    match storage.list_assignments_for_employee(&user_id).await {
        Ok(items) => {
            let total = items.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentListResponse {
                    items,
                    pagination: PaginationInfo {
                        page: 1,
                        page_size: total.max(1),
                        total,
                        total_pages: 1,
                    },
                },
                "Assignments retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Error listing assignments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list assignments",
                )),
            )
        }
    }
}
