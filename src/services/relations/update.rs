use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RelationService;
use crate::models::{
    ApiResponse, ErrorCode,
    relations::{requests::UpdateRelationRequest, responses::RelationResponse},
};

pub async fn update_relation(
    service: &RelationService,
    relation_id: i64,
    update_data: UpdateRelationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_relation(relation_id, update_data).await {
        Ok(Some(relation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RelationResponse {
                relation,
                created: false,
            },
            "Relation updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RelationNotFound,
            "Relation not found",
        ))),
        Err(e) => {
            error!("Error updating relation: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update relation",
                )),
            )
        }
    }
}
