use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::{
    entities::Assignment, requests::CreateAssignmentRequest, responses::AssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assignment(
    service: &AssignmentService,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 填写人必须是已存在的员工
    let employee = match storage.get_employee_by_id(&assignment_data.employee_id).await {
        Ok(Some(employee)) => employee,
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
                "Failed to create assignment",
            )));
        }
    };

    // 表单必须已存在
    match storage.get_form_by_id(&assignment_data.form_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FormNotFound,
                "Form not found",
            )));
        }
        Err(e) => {
            error!("Error querying form: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create assignment",
            )));
        }
    }

    let assignment = Assignment {
        id: uuid::Uuid::new_v4().to_string(),
        form_id: assignment_data.form_id,
        employee_id: employee.id.clone(),
        employee_email: employee.email.clone(),
        evaluation_target: assignment_data.evaluation_target,
        assigned_at: chrono::Utc::now(),
    };

    match storage.upsert_assignment(assignment).await {
        Ok((assignment, _created)) => {
            info!("Created assignment {} for employee {}", assignment.id, assignment.employee_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse { assignment },
                "Assignment created successfully",
            )))
        }
        Err(e) => {
            error!("Error creating assignment: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create assignment",
            )))
        }
    }
}
