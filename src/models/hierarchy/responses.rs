use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{HierarchyEdge, HierarchyNode};

// 层级图快照：节点 + 有向边
//
// 坐标布局由前端的分层布局库完成，服务端只负责图结构。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hierarchy.ts")]
pub struct HierarchyGraphResponse {
    pub nodes: Vec<HierarchyNode>,
    pub edges: Vec<HierarchyEdge>,
}
