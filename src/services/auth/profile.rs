use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireJWT;
use crate::models::employees::responses::EmployeeResponse;
use crate::models::{ApiResponse, ErrorCode};

// 令牌有效但入职未批准时员工档案尚不存在，返回 404 让前端引导入职
pub async fn get_profile(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_employee(request) {
        Some(employee) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EmployeeResponse { employee },
            "Profile retrieved successfully",
        ))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EmployeeNotFound,
            "Employee profile not found, complete onboarding first",
        ))),
    }
}
