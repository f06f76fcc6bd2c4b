//! 员工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    // 主键即身份提供方的用户 ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub is_manager: bool,
    pub is_lead: bool,
    pub is_admin: bool,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::employee_courses::Entity")]
    EmployeeCourses,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::employee_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_employee(self) -> crate::models::employees::entities::Employee {
        use chrono::{DateTime, Utc};

        crate::models::employees::entities::Employee {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            role: self.role,
            is_manager: self.is_manager,
            is_lead: self.is_lead,
            is_admin: self.is_admin,
            phone: self.phone,
            profile_picture_url: self.profile_picture_url,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
