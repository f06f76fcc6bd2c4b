//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub course_type: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_courses::Entity")]
    EmployeeCourses,
}

impl Related<super::employee_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseStatus, CourseType};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            course_type: self
                .course_type
                .parse::<CourseType>()
                .unwrap_or(CourseType::Course),
            status: self
                .status
                .parse::<CourseStatus>()
                .unwrap_or(CourseStatus::Active),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
