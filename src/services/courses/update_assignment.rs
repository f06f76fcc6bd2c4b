use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::{
    requests::UpdateCourseAssignmentRequest, responses::CourseAssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course_assignment(
    service: &CourseService,
    assignment_id: i64,
    update_data: UpdateCourseAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_course_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseAssignmentNotFound,
                "Course assignment not found",
            )));
        }
        Err(e) => {
            error!("Error querying course assignment: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update course assignment",
            )));
        }
    };

    // 管理员或记录归属的员工本人可更新进度
    let is_owner = RequireJWT::extract_user_id(request)
        .map(|user_id| user_id == assignment.employee_id)
        .unwrap_or(false);
    if !RequireJWT::is_admin(request) && !is_owner {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Not allowed to update this course assignment",
        )));
    }

    match storage
        .update_course_assignment_status(assignment_id, update_data.status)
        .await
    {
        Ok(Some(assignment)) => {
            info!("Course assignment {} status updated", assignment.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseAssignmentResponse { assignment },
                "Course assignment updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseAssignmentNotFound,
            "Course assignment not found",
        ))),
        Err(e) => {
            error!("Error updating course assignment: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update course assignment",
            )))
        }
    }
}
