use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_assignment(
    service: &AssignmentService,
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
                "Failed to get assignment",
            )));
        }
    };

    // 仅管理员或任务填写人可见
    let is_filler = RequireJWT::extract_user_id(request)
        .map(|user_id| user_id == assignment.employee_id)
        .unwrap_or(false);
    if !RequireJWT::is_admin(request) && !is_filler {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Not allowed to view this assignment",
        )));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AssignmentResponse { assignment },
        "Assignment retrieved successfully",
    )))
}
