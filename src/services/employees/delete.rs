use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EmployeeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_employee(
    service: &EmployeeService,
    employee_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 级联删除在存储层的同一事务内完成，回复保留作审计
    match storage.delete_employee(&employee_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Employee deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EmployeeNotFound,
            "Employee not found",
        ))),
        Err(e) => {
            error!("Error deleting employee: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete employee",
                )),
            )
        }
    }
}
