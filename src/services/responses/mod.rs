pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::responses::requests::SubmitResponseRequest;
use crate::storage::Storage;

pub struct ResponseService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResponseService {
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

    // 提交表单回复（任务填写人，一次性）
    pub async fn submit_response(
        &self,
        assignment_id: String,
        response_data: SubmitResponseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_response(self, assignment_id, response_data, request).await
    }

    // 查看某任务下的回复（管理员或任务填写人）
    pub async fn list_responses(
        &self,
        assignment_id: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_responses(self, assignment_id, request).await
    }
}
