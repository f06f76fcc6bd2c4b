use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::OnboardingService;
use crate::middlewares::RequireJWT;
use crate::models::onboarding::{entities::OnboardingStatus, responses::OnboardingResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn reject_request(
    service: &OnboardingService,
    request_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let approver_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    let onboarding = match storage.get_onboarding_request_by_id(request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::OnboardingRequestNotFound,
                "Onboarding request not found",
            )));
        }
        Err(e) => {
            error!("Error querying onboarding request: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to reject onboarding request",
                )),
            );
        }
    };

    // 驳回是终态操作，只作用于待审批申请
    if onboarding.status != OnboardingStatus::Pending {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::OnboardingNotPending,
            "Onboarding request is not pending",
        )));
    }

    match storage.reject_onboarding(request_id, &approver_id).await {
        Ok(Some(rejected)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            OnboardingResponse { request: rejected },
            "Onboarding request rejected",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OnboardingRequestNotFound,
            "Onboarding request not found",
        ))),
        Err(e) => {
            error!("Error rejecting onboarding request: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to reject onboarding request",
                )),
            )
        }
    }
}
