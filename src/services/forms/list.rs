use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::{ApiResponse, ErrorCode, forms::responses::FormListResponse};

pub async fn list_forms(service: &FormService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_forms().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FormListResponse { items },
            "Forms retrieved successfully",
        ))),
        Err(e) => {
            error!("Error listing forms: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list forms",
                )),
            )
        }
    }
}
