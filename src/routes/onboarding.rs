use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::onboarding::requests::OnboardingListQuery;
use crate::services::OnboardingService;
use crate::utils::SafeOnboardingIdI64;

// 懒加载的全局 OnboardingService 实例
static ONBOARDING_SERVICE: Lazy<OnboardingService> = Lazy::new(OnboardingService::new_lazy);

// HTTP处理程序
pub async fn submit_request(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    ONBOARDING_SERVICE.submit_request(&req, payload).await
}

pub async fn list_requests(
    req: HttpRequest,
    query: web::Query<OnboardingListQuery>,
) -> ActixResult<HttpResponse> {
    ONBOARDING_SERVICE.list_requests(query.into_inner(), &req).await
}

pub async fn approve_request(
    req: HttpRequest,
    request_id: SafeOnboardingIdI64,
) -> ActixResult<HttpResponse> {
    ONBOARDING_SERVICE.approve_request(request_id.0, &req).await
}

pub async fn reject_request(
    req: HttpRequest,
    request_id: SafeOnboardingIdI64,
) -> ActixResult<HttpResponse> {
    ONBOARDING_SERVICE.reject_request(request_id.0, &req).await
}

// 配置路由
pub fn configure_onboarding_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/onboarding")
            .wrap(middlewares::RequireJWT)
            // 提交申请 - 任何持有效令牌者（员工档案尚不存在也允许），限流防刷
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(submit_request)
                            .wrap(middlewares::RateLimit::onboarding_submit()),
                    )
                    // 申请列表 - 仅管理员
                    .route(web::get().to(list_requests).wrap(middlewares::RequireAdmin)),
            )
            // 审批 - 仅管理员
            .service(
                web::resource("/{id}/approve")
                    .route(web::post().to(approve_request))
                    .wrap(middlewares::RequireAdmin),
            )
            .service(
                web::resource("/{id}/reject")
                    .route(web::post().to(reject_request))
                    .wrap(middlewares::RequireAdmin),
            ),
    );
}
