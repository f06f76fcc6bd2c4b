use serde::Deserialize;
use ts_rs::TS;

use super::entities::RelationType;

// 创建/更新关系边（在 (from_id, to_id, relation_type) 上 upsert）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct UpsertRelationRequest {
    pub from_id: String,
    pub to_id: String,
    pub relation_type: RelationType,
}

// 修改已有边的类型
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/relation.ts")]
pub struct UpdateRelationRequest {
    pub relation_type: RelationType,
}
