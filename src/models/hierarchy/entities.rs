use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::relations::entities::RelationType;

// 层级图节点类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/hierarchy.ts")]
pub enum HierarchyNodeKind {
    Admin,
    Department,
    Manager,
    Lead,
    Employee,
}

// 层级图节点
//
// 员工节点 id 即员工 id；部门汇聚框 id 形如 "dept:{name}"，
// 管理员汇聚框 id 固定为 "admin-box"。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hierarchy.ts")]
pub struct HierarchyNode {
    pub id: String,
    pub label: String,
    pub kind: HierarchyNodeKind,
    pub department: Option<String>,
}

// 边的来源：显式关系优先，无主管者挂接合成兜底边
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "relation_type")]
#[ts(export, export_to = "../frontend/src/types/generated/hierarchy.ts")]
pub enum HierarchyEdgeKind {
    Relation(RelationType),
    Fallback,
}

// 层级图有向边（from 指向 to，自上而下）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/hierarchy.ts")]
pub struct HierarchyEdge {
    pub from: String,
    pub to: String,
    pub kind: HierarchyEdgeKind,
}
