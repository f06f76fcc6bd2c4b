use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EmployeeService;
use crate::models::{ApiResponse, ErrorCode, employees::requests::EmployeeListQuery};

pub async fn list_employees(
    service: &EmployeeService,
    query: EmployeeListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_employees_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Employees retrieved successfully"))),
        Err(e) => {
            error!("Error listing employees: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list employees",
                )),
            )
        }
    }
}
