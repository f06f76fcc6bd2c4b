//! 入职申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "onboarding_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub role: String,
    pub auth_role: String,
    pub phone: Option<String>,
    pub is_manager: bool,
    pub is_lead: bool,
    pub manager_name: Option<String>,
    pub profile_picture_url: Option<String>,
    pub status: String,
    pub approved_at: Option<i64>,
    pub approved_by: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_request(self) -> crate::models::onboarding::entities::OnboardingRequest {
        use crate::models::onboarding::entities::{OnboardingRequest, OnboardingStatus};
        use chrono::{DateTime, Utc};

        OnboardingRequest {
            id: self.id,
            user_id: self.user_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            role: self.role,
            auth_role: self.auth_role,
            phone: self.phone,
            is_manager: self.is_manager,
            is_lead: self.is_lead,
            manager_name: self.manager_name,
            profile_picture_url: self.profile_picture_url,
            status: self
                .status
                .parse::<OnboardingStatus>()
                .unwrap_or(OnboardingStatus::Pending),
            approved_at: self
                .approved_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            approved_by: self.approved_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
