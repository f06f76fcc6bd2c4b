use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::{ApiResponse, ErrorCode, forms::responses::FormDetailResponse};

pub async fn get_form(
    service: &FormService,
    form_id: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_form_by_id(&form_id).await {
        Ok(Some(form)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(FormDetailResponse { form }, "Form retrieved successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            "Form not found",
        ))),
        Err(e) => {
            error!("Error querying form: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get form",
                )),
            )
        }
    }
}
