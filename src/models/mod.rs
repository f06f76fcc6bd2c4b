pub mod common;

pub mod assignments;
pub mod courses;
pub mod employees;
pub mod forms;
pub mod hierarchy;
pub mod onboarding;
pub mod relations;
pub mod responses;

pub use common::error_code::ErrorCode;
pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

/// 程序启动时间，注入 app_data 供运行时长统计使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
