use serde::Deserialize;
use ts_rs::TS;

// 管理员直接添加员工
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct CreateEmployeeRequest {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub is_lead: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
}

// 管理员编辑员工（字段全部可选）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct UpdateEmployeeRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub is_manager: Option<bool>,
    pub is_lead: Option<bool>,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
}

// 员工列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct EmployeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub department: Option<String>,
    pub is_manager: Option<bool>,
    pub is_lead: Option<bool>,
}
