use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{EmployeeRelation, RelationWithEmployees};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct RelationResponse {
    pub relation: EmployeeRelation,
    // upsert 时 false 表示命中已有边（无变更）
    pub created: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct RelationListResponse {
    pub items: Vec<RelationWithEmployees>,
}
