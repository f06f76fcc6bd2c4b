use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_form(
    service: &FormService,
    form_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_form(&form_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Form deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            "Form not found",
        ))),
        Err(e) => {
            error!("Error deleting form: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete form",
                )),
            )
        }
    }
}
