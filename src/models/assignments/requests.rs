use serde::Deserialize;
use ts_rs::TS;

use super::entities::EvaluationTarget;

// 管理员手工创建任务（id 由服务端生成 uuid）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub form_id: String,
    pub employee_id: String,
    pub evaluation_target: Option<EvaluationTarget>,
}

// 任务列表查询参数（管理员可按员工过滤）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub employee_id: Option<String>,
    pub form_id: Option<String>,
}
