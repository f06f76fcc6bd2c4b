//! 表单实体
//!
//! 问题列表整体序列化为 JSON 存入 questions 文本列，编辑时整体替换。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "forms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub questions: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_form(self) -> crate::models::forms::entities::Form {
        use chrono::{DateTime, Utc};

        // 历史脏数据容错：解析失败按空问题列表处理
        let questions = serde_json::from_str(&self.questions).unwrap_or_default();

        crate::models::forms::entities::Form {
            id: self.id,
            title: self.title,
            description: self.description,
            questions,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
