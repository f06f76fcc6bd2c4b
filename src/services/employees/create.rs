use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EmployeeService;
use crate::models::{
    ApiResponse, ErrorCode,
    employees::{requests::CreateEmployeeRequest, responses::EmployeeResponse},
};
use crate::utils::validate::{
    validate_email, validate_employee_id, validate_person_name, validate_phone,
};

pub async fn create_employee(
    service: &EmployeeService,
    employee_data: CreateEmployeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证员工 ID（即身份提供方用户 ID）
    if let Err(msg) = validate_employee_id(&employee_data.id) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&employee_data.email) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg))
        );
    }

    // 验证姓名
    if let Err(msg) = validate_person_name(&employee_data.first_name)
        .and(validate_person_name(&employee_data.last_name))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 验证电话（可选字段）
    if let Some(ref phone) = employee_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg))
        );
    }

    let storage = service.get_storage(request);

    // 同 ID 员工已存在时直接冲突
    match storage.get_employee_by_id(&employee_data.id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmployeeAlreadyExists,
                "Employee already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error querying employee: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create employee",
                )),
            );
        }
    }

    match storage.create_employee(employee_data).await {
        Ok(employee) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(EmployeeResponse { employee }, "Employee created successfully"))),
        Err(e) => {
            let msg = format!("Employee creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::EmployeeAlreadyExists,
                    "Employee id or email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create employee",
                )))
            }
        }
    }
}
