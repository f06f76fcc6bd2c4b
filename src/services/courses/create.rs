use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::{requests::CreateCourseRequest, responses::CourseResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if course_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Course title cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Created course {} ({})", course.id, course.title);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Error creating course: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create course",
            )))
        }
    }
}
