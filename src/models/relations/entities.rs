use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::employees::entities::Employee;

// 关系边类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub enum RelationType {
    Manager,   // 主管边：经理 -> 直属下属
    Lead,      // 组长边：组长 -> 组员
    Colleague, // 同事边
}

impl RelationType {
    pub const MANAGER: &'static str = "manager";
    pub const LEAD: &'static str = "lead";
    pub const COLLEAGUE: &'static str = "colleague";
}

impl<'de> Deserialize<'de> for RelationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            RelationType::MANAGER => Ok(RelationType::Manager),
            RelationType::LEAD => Ok(RelationType::Lead),
            RelationType::COLLEAGUE => Ok(RelationType::Colleague),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid relation type: '{s}'. Supported types: manager, lead, colleague"
            ))),
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationType::Manager => write!(f, "{}", RelationType::MANAGER),
            RelationType::Lead => write!(f, "{}", RelationType::LEAD),
            RelationType::Colleague => write!(f, "{}", RelationType::COLLEAGUE),
        }
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(RelationType::Manager),
            "lead" => Ok(RelationType::Lead),
            "colleague" => Ok(RelationType::Colleague),
            _ => Err(format!("Invalid relation type: {s}")),
        }
    }
}

// 员工关系边（有向）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct EmployeeRelation {
    pub id: i64,
    pub from_id: String,
    pub to_id: String,
    pub relation_type: RelationType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 关系边及两端员工记录（列表接口返回）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct RelationWithEmployees {
    #[serde(flatten)]
    pub relation: EmployeeRelation,
    pub from_employee: Employee,
    pub to_employee: Employee,
}
