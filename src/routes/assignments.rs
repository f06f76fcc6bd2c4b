use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{AssignmentListQuery, CreateAssignmentRequest};
use crate::models::responses::requests::SubmitResponseRequest;
use crate::services::{AssignmentService, ResponseService};
use crate::utils::SafeAssignmentId;

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static RESPONSE_SERVICE: Lazy<ResponseService> = Lazy::new(ResponseService::new_lazy);

// HTTP处理程序
pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(assignment_data.into_inner(), &req)
        .await
}

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(query.into_inner(), &req)
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeAssignmentId,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(assignment_id.0, &req).await
}

pub async fn submit_response(
    req: HttpRequest,
    assignment_id: SafeAssignmentId,
    response_data: web::Json<SubmitResponseRequest>,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE
        .submit_response(assignment_id.0, response_data.into_inner(), &req)
        .await
}

pub async fn list_responses(
    req: HttpRequest,
    assignment_id: SafeAssignmentId,
) -> ActixResult<HttpResponse> {
    RESPONSE_SERVICE.list_responses(assignment_id.0, &req).await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 任务列表 - 业务层按角色过滤（管理员全量、员工自己的）
                    .route(web::get().to(list_assignments))
                    // 手工创建任务 - 仅管理员
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireAdmin),
                    ),
            )
            // 任务详情与回复 - 权限在业务层检查（管理员或填写人）
            .service(web::resource("/{id}").route(web::get().to(get_assignment)))
            .service(
                web::resource("/{id}/responses")
                    .route(web::post().to(submit_response))
                    .route(web::get().to(list_responses)),
            ),
    );
}
