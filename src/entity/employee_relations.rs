//! 员工关系实体（有向带类型边）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_relations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub from_id: String,
    pub to_id: String,
    pub relation_type: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::FromId",
        to = "super::employees::Column::Id"
    )]
    FromEmployee,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::ToId",
        to = "super::employees::Column::Id"
    )]
    ToEmployee,
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_relation(self) -> crate::models::relations::entities::EmployeeRelation {
        use crate::models::relations::entities::{EmployeeRelation, RelationType};
        use chrono::{DateTime, Utc};

        EmployeeRelation {
            id: self.id,
            from_id: self.from_id,
            to_id: self.to_id,
            relation_type: self
                .relation_type
                .parse::<RelationType>()
                .unwrap_or(RelationType::Colleague),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
