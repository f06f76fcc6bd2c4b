use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FormService;
use crate::models::{
    ApiResponse, ErrorCode,
    forms::{requests::CreateFormRequest, responses::FormDetailResponse},
};

pub async fn create_form(
    service: &FormService,
    form_data: CreateFormRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if form_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Form title cannot be empty",
        )));
    }

    if form_data.questions.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Form must have at least one question",
        )));
    }

    // 问题 ID 必须唯一，否则答案无法对应
    let mut seen = std::collections::HashSet::new();
    for question in &form_data.questions {
        if !seen.insert(&question.id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("Duplicate question id: {}", question.id),
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage.create_form(form_data).await {
        Ok(form) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(FormDetailResponse { form }, "Form created successfully"))),
        Err(e) => {
            let msg = format!("Form creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Form with the same id already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create form",
                )))
            }
        }
    }
}
