use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_employee_id, validate_opaque_id};

fn bad_path_param(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    InternalError::from_response(
        actix_web::error::ErrorBadRequest(message.to_string()),
        response,
    )
    .into()
}

/// 生成从路径中提取并校验 i64 ID 的提取器
macro_rules! define_i64_extractor {
    ($name:ident, $param:literal, $message:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_path_param($message)),
                })
            }
        }
    };
}

/// 生成从路径中提取字符串 ID 的提取器
///
/// 字符串 ID 按指定校验函数过滤，避免把任意路径段传进存储层。
macro_rules! define_string_extractor {
    ($name:ident, $param:literal, $validator:path, $message:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub String);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req
                    .match_info()
                    .get($param)
                    .map(str::to_string)
                    .filter(|raw| $validator(raw).is_ok());
                ready(match value {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_path_param($message)),
                })
            }
        }
    };
}

define_i64_extractor!(SafeRelationIdI64, "id", "Relation id must be a positive integer");
define_i64_extractor!(SafeCourseIdI64, "id", "Course id must be a positive integer");
define_i64_extractor!(SafeOnboardingIdI64, "id", "Onboarding request id must be a positive integer");

define_string_extractor!(SafeEmployeeId, "id", validate_employee_id, "Employee id format is invalid");
define_string_extractor!(SafeFormId, "id", validate_opaque_id, "Form id format is invalid");
define_string_extractor!(SafeAssignmentId, "id", validate_opaque_id, "Assignment id format is invalid");
