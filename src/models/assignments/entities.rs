use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评估对象类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum EvaluationTargetType {
    Manager,
    Employee,
    Lead,
    Admin,
    Colleague,
}

impl EvaluationTargetType {
    pub const MANAGER: &'static str = "manager";
    pub const EMPLOYEE: &'static str = "employee";
    pub const LEAD: &'static str = "lead";
    pub const ADMIN: &'static str = "admin";
    pub const COLLEAGUE: &'static str = "colleague";
}

impl<'de> Deserialize<'de> for EvaluationTargetType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid evaluation target type: '{s}'. Supported types: manager, employee, lead, admin, colleague"
            ))
        })
    }
}

impl std::fmt::Display for EvaluationTargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EvaluationTargetType::Manager => EvaluationTargetType::MANAGER,
            EvaluationTargetType::Employee => EvaluationTargetType::EMPLOYEE,
            EvaluationTargetType::Lead => EvaluationTargetType::LEAD,
            EvaluationTargetType::Admin => EvaluationTargetType::ADMIN,
            EvaluationTargetType::Colleague => EvaluationTargetType::COLLEAGUE,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EvaluationTargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(EvaluationTargetType::Manager),
            "employee" => Ok(EvaluationTargetType::Employee),
            "lead" => Ok(EvaluationTargetType::Lead),
            "admin" => Ok(EvaluationTargetType::Admin),
            "colleague" => Ok(EvaluationTargetType::Colleague),
            _ => Err(format!("Invalid evaluation target type: {s}")),
        }
    }
}

/// 被评估人的时点快照
///
/// 分配时落库，之后被评估人的姓名/角色变动不回写历史任务。
/// 始终作为值对象整体读写，不做实时 join。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct EvaluationTarget {
    #[serde(rename = "type")]
    pub target_type: EvaluationTargetType,
    pub target_id: String,
    pub target_name: String,
    pub target_role: String,
    pub target_department: String,
}

// 评估任务：某员工需要填写某表单，附可选的评估对象快照
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: String,
    pub form_id: String,
    pub employee_id: String,
    pub employee_email: String,
    pub evaluation_target: Option<EvaluationTarget>,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}
