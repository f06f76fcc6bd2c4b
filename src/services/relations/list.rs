use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::RelationService;
use crate::models::{ApiResponse, ErrorCode, relations::responses::RelationListResponse};

pub async fn list_relations(
    service: &RelationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_relations_with_employees().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RelationListResponse { items },
            "Relations retrieved successfully",
        ))),
        Err(e) => {
            error!("Error listing relations: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list relations",
                )),
            )
        }
    }
}
