use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EmployeeService;
use crate::models::{
    ApiResponse, ErrorCode,
    employees::{requests::UpdateEmployeeRequest, responses::EmployeeResponse},
};
use crate::utils::validate::{validate_email, validate_phone};

pub async fn update_employee(
    service: &EmployeeService,
    employee_id: String,
    update_data: UpdateEmployeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证可选字段
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg))
        );
    }

    if let Some(ref phone) = update_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.update_employee(&employee_id, update_data).await {
        Ok(Some(employee)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(EmployeeResponse { employee }, "Employee updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EmployeeNotFound,
            "Employee not found",
        ))),
        Err(e) => {
            error!("Error updating employee: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update employee",
                )),
            )
        }
    }
}
