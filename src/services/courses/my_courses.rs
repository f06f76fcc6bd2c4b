use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::responses::EmployeeCourseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_my_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.list_employee_courses(&user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EmployeeCourseListResponse { items },
            "My courses retrieved successfully",
        ))),
        Err(e) => {
            error!("Error listing employee courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list my courses",
                )),
            )
        }
    }
}
