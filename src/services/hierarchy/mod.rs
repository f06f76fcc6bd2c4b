pub mod graph;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct HierarchyService {
    storage: Option<Arc<dyn Storage>>,
}

impl HierarchyService {
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

    // 组织层级图（纯读，不落库）
    pub async fn get_hierarchy(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        graph::get_hierarchy(self, request).await
    }
}
