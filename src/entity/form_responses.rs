//! 表单回复实体
//!
//! 审计口径的原始记录：入库后不变更，不随员工删除级联。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "form_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: String,
    pub responder_id: String,
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_response(self) -> crate::models::responses::entities::FormResponse {
        use chrono::{DateTime, Utc};

        let answers = serde_json::from_str(&self.answers).unwrap_or_default();

        crate::models::responses::entities::FormResponse {
            id: self.id,
            assignment_id: self.assignment_id,
            responder_id: self.responder_id,
            answers,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
        }
    }
}
