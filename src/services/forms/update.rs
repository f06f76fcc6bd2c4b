use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::{
    ApiResponse, ErrorCode,
    forms::{requests::UpdateFormRequest, responses::FormDetailResponse},
};

pub async fn update_form(
    service: &FormService,
    form_id: String,
    update_data: UpdateFormRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 更新是整体替换问题列表，空列表视为无效
    if let Some(ref questions) = update_data.questions {
        if questions.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Form must have at least one question",
            )));
        }
        let mut seen = std::collections::HashSet::new();
        for question in questions {
            if !seen.insert(&question.id) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    format!("Duplicate question id: {}", question.id),
                )));
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_form(&form_id, update_data).await {
        Ok(Some(form)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(FormDetailResponse { form }, "Form updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FormNotFound,
            "Form not found",
        ))),
        Err(e) => {
            error!("Error updating form: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update form",
                )),
            )
        }
    }
}
