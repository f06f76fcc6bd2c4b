use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResponseService;
use crate::middlewares::RequireJWT;
use crate::models::responses::responses::ResponseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_responses(
    service: &ResponseService,
    assignment_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(&assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Error querying assignment: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to list responses",
            )));
        }
    };

    // 回复可见性与任务本身一致：管理员或填写人
    let is_filler = RequireJWT::extract_user_id(request)
        .map(|user_id| user_id == assignment.employee_id)
        .unwrap_or(false);
    if !RequireJWT::is_admin(request) && !is_filler {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Not allowed to view responses for this assignment",
        )));
    }

    match storage.list_responses_for_assignment(&assignment_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ResponseListResponse { items },
            "Responses retrieved successfully",
        ))),
        Err(e) => {
            error!("Error listing responses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list responses",
                )),
            )
        }
    }
}
