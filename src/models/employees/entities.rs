use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 身份提供方的管理员角色标签
pub const ADMIN_ROLE: &str = "admin";

// 员工实体
//
// id 即外部身份提供方的用户 ID，本系统不自行分配。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct Employee {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub is_manager: bool,
    pub is_lead: bool,
    // 身份提供方角色元数据的本地快照，员工落库时写入，
    // 评估分配引擎据此一次查询定位管理员
    pub is_admin: bool,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 以标志位推导的展示角色（Manager 优先于 Lead）
    pub fn display_role(&self) -> &'static str {
        if self.is_manager {
            "Manager"
        } else if self.is_lead {
            "Lead"
        } else {
            "Employee"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(is_manager: bool, is_lead: bool) -> Employee {
        Employee {
            id: "u1".into(),
            email: "jane.doe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            department: "Engineering".into(),
            role: "Engineer".into(),
            is_manager,
            is_lead,
            is_admin: false,
            phone: None,
            profile_picture_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(employee(false, false).full_name(), "Jane Doe");
    }

    #[test]
    fn test_display_role_precedence() {
        assert_eq!(employee(true, true).display_role(), "Manager");
        assert_eq!(employee(false, true).display_role(), "Lead");
        assert_eq!(employee(false, false).display_role(), "Employee");
    }
}
