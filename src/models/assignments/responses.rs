use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Assignment;
use crate::models::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentResponse {
    pub assignment: Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 自动分配结果：按 ID 前缀分类的数量明细
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AutoAssignBreakdown {
    pub manager_evaluations: usize,
    pub lead_evaluations: usize,
    pub employee_evaluations: usize,
    pub admin_evaluations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AutoAssignResponse {
    pub assignments: usize,
    pub breakdown: AutoAssignBreakdown,
}
