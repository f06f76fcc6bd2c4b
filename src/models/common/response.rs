//! 统一 API 响应信封
//!
//! 所有 HTTP 端点都返回这个结构：业务码 + 提示语 + 可选数据。
//! HTTP 状态码表达传输层结果，`code` 表达业务结果，前端只看 `code`。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    /// 带载荷的错误响应，例如审批冲突时回传当前申请状态
    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_omits_data_field() {
        let envelope =
            ApiResponse::<()>::error_empty(ErrorCode::EmployeeNotFound, "Employee not found");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["code"], ErrorCode::EmployeeNotFound as i32);
        assert_eq!(json["message"], "Employee not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_carries_zero_code() {
        let envelope = ApiResponse::success(5, "Auto-assignment completed successfully");
        assert_eq!(envelope.code, ErrorCode::Success as i32);
        assert_eq!(envelope.data, Some(5));
    }
}
