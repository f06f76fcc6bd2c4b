use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

// 表单回复：对某个评估任务的一次提交
//
// answers 是 问题ID -> 答案文本 的不透明映射，入库后不再变更，
// 是审计口径的原始记录。员工删除不级联到这里。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct FormResponse {
    pub id: i64,
    pub assignment_id: String,
    pub responder_id: String,
    pub answers: BTreeMap<String, String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
