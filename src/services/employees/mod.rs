pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::employees::requests::{
    CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest,
};
use crate::storage::Storage;

pub struct EmployeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl EmployeeService {
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

    // 获取员工列表
    pub async fn list_employees(
        &self,
        query: EmployeeListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_employees(self, query, request).await
    }

    // 创建员工
    pub async fn create_employee(
        &self,
        employee_data: CreateEmployeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_employee(self, employee_data, request).await
    }

    // 根据ID获取员工
    pub async fn get_employee(
        &self,
        employee_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_employee(self, employee_id, request).await
    }

    // 更新员工信息
    pub async fn update_employee(
        &self,
        employee_id: String,
        update_data: UpdateEmployeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_employee(self, employee_id, update_data, request).await
    }

    // 删除员工
    pub async fn delete_employee(
        &self,
        employee_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_employee(self, employee_id, request).await
    }
}
