//! 员工课程关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee_courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_id: String,
    pub course_id: i64,
    pub status: String,
    pub assigned_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
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
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_employee_course(self) -> crate::models::courses::entities::EmployeeCourse {
        use crate::models::courses::entities::{EmployeeCourse, EmployeeCourseStatus};
        use chrono::{DateTime, Utc};

        EmployeeCourse {
            id: self.id,
            employee_id: self.employee_id,
            course_id: self.course_id,
            status: self
                .status
                .parse::<EmployeeCourseStatus>()
                .unwrap_or(EmployeeCourseStatus::Assigned),
            assigned_at: DateTime::<Utc>::from_timestamp(self.assigned_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
            completed_at: self
                .completed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}
