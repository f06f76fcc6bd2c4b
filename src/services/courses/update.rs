use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::{requests::UpdateCourseRequest, responses::CourseResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = &update_data.title {
        if title.trim().is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Course title cannot be empty",
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Updated course {}", course.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseResponse { course },
                "Course updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Error updating course: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update course",
            )))
        }
    }
}
