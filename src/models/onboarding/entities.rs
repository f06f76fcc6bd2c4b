use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 入职申请状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub enum OnboardingStatus {
    Pending,  // 待审批
    Approved, // 已通过（终态）
    Rejected, // 已驳回（终态）
}

impl OnboardingStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";
}

impl<'de> Deserialize<'de> for OnboardingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            OnboardingStatus::PENDING => Ok(OnboardingStatus::Pending),
            OnboardingStatus::APPROVED => Ok(OnboardingStatus::Approved),
            OnboardingStatus::REJECTED => Ok(OnboardingStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid onboarding status: '{s}'. Supported statuses: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnboardingStatus::Pending => write!(f, "{}", OnboardingStatus::PENDING),
            OnboardingStatus::Approved => write!(f, "{}", OnboardingStatus::APPROVED),
            OnboardingStatus::Rejected => write!(f, "{}", OnboardingStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for OnboardingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OnboardingStatus::Pending),
            "approved" => Ok(OnboardingStatus::Approved),
            "rejected" => Ok(OnboardingStatus::Rejected),
            _ => Err(format!("Invalid onboarding status: {s}")),
        }
    }
}

// 入职申请
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct OnboardingRequest {
    pub id: i64,
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    // 提交时令牌携带的身份提供方角色声明，审批落库时转为员工的 is_admin
    pub auth_role: String,
    pub phone: Option<String>,
    pub is_manager: bool,
    pub is_lead: bool,
    // 自由文本的"我的主管"，审批时按姓名解析
    pub manager_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub status: OnboardingStatus,
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,
    pub approved_by: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 审批时对 manager_name 的解析结果
///
/// 解析失败不阻塞审批，但必须原样返回给管理员，
/// 避免"主管没挂上却无人知晓"。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "result", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub enum ManagerResolution {
    // 唯一匹配，已创建 MANAGER 边
    Resolved { employee_id: String },
    // 多个候选，未创建边
    Ambiguous { candidate_ids: Vec<String> },
    // 无匹配，未创建边
    NotFound,
    // 申请未填写主管姓名
    NotRequested,
}
