use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RelationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_relation(
    service: &RelationService,
    relation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_relation(relation_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Relation deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RelationNotFound,
            "Relation not found",
        ))),
        Err(e) => {
            error!("Error deleting relation: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete relation",
                )),
            )
        }
    }
}
