use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::OnboardingService;
use crate::models::{
    ApiResponse, ErrorCode,
    onboarding::{entities::OnboardingStatus, requests::OnboardingListQuery},
};

pub async fn list_requests(
    service: &OnboardingService,
    mut query: OnboardingListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 审批队列默认只看待处理的申请
    if query.status.is_none() {
        query.status = Some(OnboardingStatus::Pending);
    }

    match storage.list_onboarding_requests_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Onboarding requests retrieved successfully")))
        }
        Err(e) => {
            error!("Error listing onboarding requests: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list onboarding requests",
                )),
            )
        }
    }
}
