pub mod assign;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod my_courses;
pub mod update;
pub mod update_assignment;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{
    AssignCourseRequest, CourseListQuery, CreateCourseRequest, UpdateCourseAssignmentRequest,
    UpdateCourseRequest,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    // 获取课程
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 分页列出课程
    pub async fn list_courses(
        &self,
        query: CourseListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }

    // 删除课程（级联删除分配记录）
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    // 分配课程给员工
    pub async fn assign_course(
        &self,
        assign_data: AssignCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_course(self, assign_data, request).await
    }

    // 更新课程分配状态
    pub async fn update_course_assignment(
        &self,
        assignment_id: i64,
        update_data: UpdateCourseAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update_assignment::update_course_assignment(self, assignment_id, update_data, request).await
    }

    // 当前员工的课程列表
    pub async fn list_my_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_courses::list_my_courses(self, request).await
    }
}
