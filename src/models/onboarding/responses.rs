use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{ManagerResolution, OnboardingRequest};
use crate::models::PaginationInfo;
use crate::models::employees::entities::Employee;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct OnboardingResponse {
    pub request: OnboardingRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct OnboardingListResponse {
    pub items: Vec<OnboardingRequest>,
    pub pagination: PaginationInfo,
}

// 审批通过的结果：物化的员工 + 关系接线的明细
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/onboarding.ts")]
pub struct ApprovalResponse {
    pub employee: Employee,
    pub manager_resolution: ManagerResolution,
    // is_lead 扇出自动创建的 LEAD 边数量
    pub lead_edges_created: usize,
}
