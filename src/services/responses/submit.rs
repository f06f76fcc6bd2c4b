use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::ResponseService;
use crate::middlewares::RequireJWT;
use crate::models::responses::{requests::SubmitResponseRequest, responses::ResponseDetail};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate_answers;

// 重复提交的提示语是对外契约，前端按这段文案展示
const DUPLICATE_SUBMISSION_MESSAGE: &str = "You have already submitted this form";

// 校验顺序：任务存在 → 填写人本人 → 未重复提交 → 答案合法
pub async fn submit_response(
    service: &ResponseService,
    assignment_id: String,
    response_data: SubmitResponseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match storage.get_assignment_by_id(&assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Error querying assignment: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit response",
            )));
        }
    };

    let responder_id = match RequireJWT::extract_user_id(request) {
        Some(user_id) => user_id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 只有被指派的填写人可以提交，管理员也不能代填
    if responder_id != assignment.employee_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only the assigned employee can submit a response",
        )));
    }

    match storage
        .get_response_by_assignment_and_responder(&assignment_id, &responder_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::DuplicateResponse,
                DUPLICATE_SUBMISSION_MESSAGE,
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error checking for an existing response: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit response",
            )));
        }
    }

    // 按表单定义校验答案；表单被删时任务成为孤儿，视为任务不存在
    let form = match storage.get_form_by_id(&assignment.form_id).await {
        Ok(Some(form)) => form,
        Ok(None) => {
            warn!("Assignment {} references a form {} that no longer exists", assignment_id, assignment.form_id);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FormNotFound,
                "Form not found",
            )));
        }
        Err(e) => {
            error!("Error querying form: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit response",
            )));
        }
    };

    if let Err(detail) = validate_answers(&form, &response_data.answers) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AnswersInvalid,
            format!("Answer validation failed: {detail}"),
        )));
    }

    match storage
        .create_response(&assignment_id, &responder_id, response_data.answers)
        .await
    {
        Ok(response) => {
            info!("Employee {} submitted a response for assignment {}", responder_id, assignment_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ResponseDetail { response },
                "Response submitted successfully",
            )))
        }
        Err(e) => {
            error!("Error creating response: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to submit response",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DUPLICATE_SUBMISSION_MESSAGE;

    #[test]
    fn test_duplicate_submission_message_is_stable() {
        assert_eq!(DUPLICATE_SUBMISSION_MESSAGE, "You have already submitted this form");
    }
}
