use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::models::relations::requests::{UpdateRelationRequest, UpsertRelationRequest};
use crate::services::{EmployeeService, HierarchyService, RelationService};
use crate::utils::{SafeEmployeeId, SafeRelationIdI64};

// 懒加载的全局服务实例
static EMPLOYEE_SERVICE: Lazy<EmployeeService> = Lazy::new(EmployeeService::new_lazy);
static RELATION_SERVICE: Lazy<RelationService> = Lazy::new(RelationService::new_lazy);
static HIERARCHY_SERVICE: Lazy<HierarchyService> = Lazy::new(HierarchyService::new_lazy);

// HTTP处理程序
pub async fn list_employees(
    req: HttpRequest,
    query: web::Query<EmployeeListQuery>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.list_employees(query.into_inner(), &req).await
}

pub async fn create_employee(
    req: HttpRequest,
    employee_data: web::Json<CreateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .create_employee(employee_data.into_inner(), &req)
        .await
}

pub async fn get_employee(req: HttpRequest, employee_id: SafeEmployeeId) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.get_employee(employee_id.0, &req).await
}

pub async fn update_employee(
    req: HttpRequest,
    employee_id: SafeEmployeeId,
    update_data: web::Json<UpdateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE
        .update_employee(employee_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_employee(
    req: HttpRequest,
    employee_id: SafeEmployeeId,
) -> ActixResult<HttpResponse> {
    EMPLOYEE_SERVICE.delete_employee(employee_id.0, &req).await
}

pub async fn get_hierarchy(req: HttpRequest) -> ActixResult<HttpResponse> {
    HIERARCHY_SERVICE.get_hierarchy(&req).await
}

pub async fn upsert_relation(
    req: HttpRequest,
    relation_data: web::Json<UpsertRelationRequest>,
) -> ActixResult<HttpResponse> {
    RELATION_SERVICE
        .upsert_relation(relation_data.into_inner(), &req)
        .await
}

pub async fn list_relations(req: HttpRequest) -> ActixResult<HttpResponse> {
    RELATION_SERVICE.list_relations(&req).await
}

pub async fn update_relation(
    req: HttpRequest,
    relation_id: SafeRelationIdI64,
    update_data: web::Json<UpdateRelationRequest>,
) -> ActixResult<HttpResponse> {
    RELATION_SERVICE
        .update_relation(relation_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_relation(
    req: HttpRequest,
    relation_id: SafeRelationIdI64,
) -> ActixResult<HttpResponse> {
    RELATION_SERVICE.delete_relation(relation_id.0, &req).await
}

// 配置路由
//
// /hierarchy 与 /relations 必须注册在 /{id} 通配之前
pub fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .wrap(middlewares::RequireJWT)
            // 组织层级图 - 所有登录用户可访问
            .service(web::resource("/hierarchy").route(web::get().to(get_hierarchy)))
            // 关系边管理 - 仅管理员
            .service(
                web::scope("/relations")
                    .wrap(middlewares::RequireAdmin)
                    .route("", web::post().to(upsert_relation))
                    .route("", web::get().to(list_relations))
                    .route("/{id}", web::put().to(update_relation))
                    .route("/{id}", web::delete().to(delete_relation)),
            )
            // 员工管理 - 仅管理员
            .service(
                web::scope("")
                    .wrap(middlewares::RequireAdmin)
                    .route("", web::get().to(list_employees))
                    .route("", web::post().to(create_employee))
                    .route("/{id}", web::get().to(get_employee))
                    .route("/{id}", web::put().to(update_employee))
                    .route("/{id}", web::delete().to(delete_employee)),
            ),
    );
}
