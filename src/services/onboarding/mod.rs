pub mod approve;
pub mod list;
pub mod reject;
pub mod submit;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::onboarding::requests::OnboardingListQuery;
use crate::storage::Storage;

pub struct OnboardingService {
    storage: Option<Arc<dyn Storage>>,
}

impl OnboardingService {
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

    // 提交入职申请（multipart，含可选头像）
    pub async fn submit_request(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        submit::submit_request(self, request, payload).await
    }

    // 列出入职申请
    pub async fn list_requests(
        &self,
        query: OnboardingListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_requests(self, query, request).await
    }

    // 批准入职申请
    pub async fn approve_request(
        &self,
        request_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_request(self, request_id, request).await
    }

    // 驳回入职申请
    pub async fn reject_request(
        &self,
        request_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reject::reject_request(self, request_id, request).await
    }
}
