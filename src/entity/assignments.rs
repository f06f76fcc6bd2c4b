//! 评估任务实体
//!
//! target_* 列是被评估人的时点快照，分配后不跟随员工记录变化。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    // 引擎生成的任务用内容推导 ID："{kind}-eval-{evaluator}-{target}-{form}"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub form_id: String,
    pub employee_id: String,
    pub employee_email: String,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    pub target_role: Option<String>,
    pub target_department: Option<String>,
    pub assigned_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::forms::Entity",
        from = "Column::FormId",
        to = "super::forms::Column::Id"
    )]
    Form,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::forms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::{
            Assignment, EvaluationTarget, EvaluationTargetType,
        };
        use chrono::{DateTime, Utc};

        // 五列要么全有要么全无，缺一按无快照处理
        let evaluation_target = match (
            self.target_type
                .as_deref()
                .and_then(|t| t.parse::<EvaluationTargetType>().ok()),
            self.target_id,
            self.target_name,
            self.target_role,
            self.target_department,
        ) {
            (Some(target_type), Some(target_id), Some(target_name), Some(target_role), Some(target_department)) => {
                Some(EvaluationTarget {
                    target_type,
                    target_id,
                    target_name,
                    target_role,
                    target_department,
                })
            }
            _ => None,
        };

        Assignment {
            id: self.id,
            form_id: self.form_id,
            employee_id: self.employee_id,
            employee_email: self.employee_email,
            evaluation_target,
            assigned_at: DateTime::<Utc>::from_timestamp(self.assigned_at, 0).unwrap_or_default(),
        }
    }
}
