use serde::Deserialize;
use std::collections::BTreeMap;
use ts_rs::TS;

// 提交表单回复
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct SubmitResponseRequest {
    pub answers: BTreeMap<String, String>,
}
