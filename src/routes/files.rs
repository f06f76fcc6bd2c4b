use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::FileService;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn serve_upload(
    request: HttpRequest,
    file_name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE
        .serve_upload(file_name.into_inner(), &request)
        .await
}

// 配置路由
//
// 头像 URL 直接嵌在 <img> 标签里，无法携带 Bearer 头，因此不挂 JWT；
// 文件名是服务端生成的 uuid，业务层再做路径穿越拦截。
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/uploads")
            .wrap(middleware::Compress::default())
            .wrap(middlewares::RateLimit::api())
            .route("/{name}", web::get().to(serve_upload)),
    );
}
