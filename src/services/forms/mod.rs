pub mod auto_assign;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::forms::requests::{CreateFormRequest, UpdateFormRequest};
use crate::storage::Storage;

pub struct FormService {
    storage: Option<Arc<dyn Storage>>,
}

impl FormService {
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

    // 创建表单
    pub async fn create_form(
        &self,
        form_data: CreateFormRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_form(self, form_data, request).await
    }

    // 获取表单
    pub async fn get_form(
        &self,
        form_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_form(self, form_id, request).await
    }

    // 列出表单
    pub async fn list_forms(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_forms(self, request).await
    }

    // 更新表单
    pub async fn update_form(
        &self,
        form_id: String,
        update_data: UpdateFormRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_form(self, form_id, update_data, request).await
    }

    // 删除表单
    pub async fn delete_form(
        &self,
        form_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_form(self, form_id, request).await
    }

    // 依据组织关系自动生成评估任务
    pub async fn auto_assign(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        auto_assign::auto_assign(self, request).await
    }
}
