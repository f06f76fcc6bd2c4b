use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::FormResponse;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct ResponseDetail {
    pub response: FormResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/response.ts")]
pub struct ResponseListResponse {
    pub items: Vec<FormResponse>,
}
