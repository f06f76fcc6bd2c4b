use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::models::courses::{requests::AssignCourseRequest, responses::CourseAssignmentResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign_course(
    service: &CourseService,
    assign_data: AssignCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 员工与课程都必须存在
    match storage.get_employee_by_id(&assign_data.employee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EmployeeNotFound,
                "Employee not found",
            )));
        }
        Err(e) => {
            error!("Error querying employee: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to assign course",
            )));
        }
    }

    match storage.get_course_by_id(assign_data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Error querying course: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to assign course",
            )));
        }
    }

    match storage
        .assign_course(&assign_data.employee_id, assign_data.course_id)
        .await
    {
        Ok((assignment, created)) => {
            info!(
                "Course {} assigned to employee {} ({})",
                assign_data.course_id,
                assign_data.employee_id,
                if created { "created" } else { "already existed" }
            );
            let mut builder = if created {
                HttpResponse::Created()
            } else {
                HttpResponse::Ok()
            };
            Ok(builder.json(ApiResponse::success(
                CourseAssignmentResponse { assignment },
                if created { "Course assigned successfully" } else { "Course was already assigned" },
            )))
        }
        Err(e) => {
            error!("Error assigning course: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to assign course",
            )))
        }
    }
}
