pub mod delete;
pub mod list;
pub mod update;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::relations::requests::{UpdateRelationRequest, UpsertRelationRequest};
use crate::storage::Storage;

pub struct RelationService {
    storage: Option<Arc<dyn Storage>>,
}

impl RelationService {
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

    // 幂等写入关系边
    pub async fn upsert_relation(
        &self,
        relation_data: UpsertRelationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_relation(self, relation_data, request).await
    }

    // 列出关系边（带两端员工）
    pub async fn list_relations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_relations(self, request).await
    }

    // 修改关系边类型
    pub async fn update_relation(
        &self,
        relation_id: i64,
        update_data: UpdateRelationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_relation(self, relation_id, update_data, request).await
    }

    // 删除关系边
    pub async fn delete_relation(
        &self,
        relation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_relation(self, relation_id, request).await
    }
}
