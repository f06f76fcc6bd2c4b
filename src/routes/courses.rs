use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    AssignCourseRequest, CourseListQuery, CreateCourseRequest, UpdateCourseAssignmentRequest,
    UpdateCourseRequest,
};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course_data.into_inner(), &req).await
}

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn assign_course(
    req: HttpRequest,
    assign_data: web::Json<AssignCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.assign_course(assign_data.into_inner(), &req).await
}

pub async fn update_course_assignment(
    req: HttpRequest,
    assignment_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course_assignment(assignment_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn list_my_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_my_courses(&req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            // 我的课程 - 所有登录用户可访问
            .service(web::resource("/my").route(web::get().to(list_my_courses)))
            // 分配课程 - 仅管理员
            .service(
                web::resource("/assign")
                    .route(web::post().to(assign_course))
                    .wrap(middlewares::RequireAdmin),
            )
            // 课程进度 - 权限在业务层检查（管理员或归属员工）
            .service(
                web::resource("/assignments/{id}/status")
                    .route(web::put().to(update_course_assignment)),
            )
            .service(
                web::resource("")
                    // 课程列表 - 所有登录用户可访问
                    .route(web::get().to(list_courses))
                    // 创建课程 - 仅管理员
                    .route(web::post().to(create_course).wrap(middlewares::RequireAdmin)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course).wrap(middlewares::RequireAdmin))
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireAdmin),
                    ),
            ),
    );
}
