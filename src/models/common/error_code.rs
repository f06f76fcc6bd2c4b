use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码
///
/// 放在 `ApiResponse.code` 中返回给前端。约定：0 表示成功，
/// 4xxyy/5xxyy 的前三位与 HTTP 状态码对应，后两位区分具体业务场景。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求/校验错误
    BadRequest = 40000,
    ValidationFailed = 40001,
    SelfRelationNotAllowed = 40002,
    AnswersInvalid = 40003,
    EmailInvalid = 40004,
    PhoneInvalid = 40005,
    CanonicalFormMissing = 40006,
    NoEvaluationCandidates = 40007,
    FileTypeNotAllowed = 40010,
    FileSizeExceeded = 40011,
    MultifileUploadNotAllowed = 40012,

    // 401xx / 403xx 认证授权
    Unauthorized = 40100,
    Forbidden = 40300,

    // 404xx 资源不存在
    NotFound = 40400,
    EmployeeNotFound = 40401,
    RelationNotFound = 40402,
    OnboardingRequestNotFound = 40403,
    FormNotFound = 40404,
    AssignmentNotFound = 40405,
    CourseNotFound = 40406,
    CourseAssignmentNotFound = 40407,
    FileNotFound = 40408,

    // 409xx 冲突
    DuplicateResponse = 40901,
    OnboardingAlreadySubmitted = 40902,
    OnboardingNotPending = 40903,
    EmployeeAlreadyExists = 40904,
    RelationAlreadyExists = 40905,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务端错误
    InternalServerError = 50000,
    FileUploadFailed = 50001,
    AutoAssignFailed = 50002,
}
