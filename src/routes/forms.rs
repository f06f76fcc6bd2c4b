use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forms::requests::{CreateFormRequest, UpdateFormRequest};
use crate::services::FormService;
use crate::utils::SafeFormId;

// 懒加载的全局 FormService 实例
static FORM_SERVICE: Lazy<FormService> = Lazy::new(FormService::new_lazy);

// HTTP处理程序
pub async fn create_form(
    req: HttpRequest,
    form_data: web::Json<CreateFormRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE.create_form(form_data.into_inner(), &req).await
}

pub async fn list_forms(req: HttpRequest) -> ActixResult<HttpResponse> {
    FORM_SERVICE.list_forms(&req).await
}

pub async fn get_form(req: HttpRequest, form_id: SafeFormId) -> ActixResult<HttpResponse> {
    FORM_SERVICE.get_form(form_id.0, &req).await
}

pub async fn update_form(
    req: HttpRequest,
    form_id: SafeFormId,
    update_data: web::Json<UpdateFormRequest>,
) -> ActixResult<HttpResponse> {
    FORM_SERVICE
        .update_form(form_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_form(req: HttpRequest, form_id: SafeFormId) -> ActixResult<HttpResponse> {
    FORM_SERVICE.delete_form(form_id.0, &req).await
}

pub async fn auto_assign(req: HttpRequest) -> ActixResult<HttpResponse> {
    FORM_SERVICE.auto_assign(&req).await
}

// 配置路由
pub fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forms")
            .wrap(middlewares::RequireJWT)
            // 自动分配 - 仅管理员，限流防止并发重跑
            .service(
                web::resource("/auto-assign")
                    .route(
                        web::post()
                            .to(auto_assign)
                            .wrap(middlewares::RateLimit::auto_assign()),
                    )
                    .wrap(middlewares::RequireAdmin),
            )
            .service(
                web::resource("")
                    // 表单列表 - 所有登录用户可访问（填表时需要表单定义）
                    .route(web::get().to(list_forms))
                    // 创建表单 - 仅管理员
                    .route(web::post().to(create_form).wrap(middlewares::RequireAdmin)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_form))
                    .route(web::put().to(update_form).wrap(middlewares::RequireAdmin))
                    .route(web::delete().to(delete_form).wrap(middlewares::RequireAdmin)),
            ),
    );
}
