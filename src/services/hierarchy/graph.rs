//! 组织层级图构建
//!
//! 纯函数 [`build_hierarchy`]：员工与关系边进、节点与边出，
//! 不做布局计算，坐标由前端自行排布。

use std::collections::{HashMap, HashSet};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::HierarchyService;
use crate::models::employees::entities::Employee;
use crate::models::hierarchy::{
    entities::{HierarchyEdge, HierarchyEdgeKind, HierarchyNode, HierarchyNodeKind},
    responses::HierarchyGraphResponse,
};
use crate::models::relations::entities::{EmployeeRelation, RelationType};
use crate::models::{ApiResponse, ErrorCode};

pub const ADMIN_BOX_ID: &str = "admin-box";

fn dept_box_id(department: &str) -> String {
    format!("dept:{department}")
}

fn node_kind(employee: &Employee) -> HierarchyNodeKind {
    if employee.is_admin {
        HierarchyNodeKind::Admin
    } else if employee.is_manager {
        HierarchyNodeKind::Manager
    } else if employee.is_lead {
        HierarchyNodeKind::Lead
    } else {
        HierarchyNodeKind::Employee
    }
}

/// 构建层级图
///
/// 边优先级：显式关系边全部保留（两端缺失的过期边除外）；
/// 之后没有任何主管入边的节点按部门挂到部门框，无部门则挂到管理员框，
/// 保证图中没有孤立节点。部门框本身挂在管理员框下。
pub fn build_hierarchy(
    employees: &[Employee],
    relations: &[EmployeeRelation],
) -> (Vec<HierarchyNode>, Vec<HierarchyEdge>) {
    let ids: HashSet<&str> = employees.iter().map(|e| e.id.as_str()).collect();

    let mut nodes: Vec<HierarchyNode> = vec![HierarchyNode {
        id: ADMIN_BOX_ID.to_string(),
        label: "Administration".to_string(),
        kind: HierarchyNodeKind::Admin,
        department: None,
    }];
    let mut edges: Vec<HierarchyEdge> = Vec::new();

    for employee in employees {
        nodes.push(HierarchyNode {
            id: employee.id.clone(),
            label: employee.full_name(),
            kind: node_kind(employee),
            department: if employee.department.trim().is_empty() {
                None
            } else {
                Some(employee.department.clone())
            },
        });
    }

    // 显式关系边
    let mut supervised: HashSet<&str> = HashSet::new();
    for relation in relations {
        if !ids.contains(relation.from_id.as_str()) || !ids.contains(relation.to_id.as_str()) {
            continue;
        }
        if matches!(
            relation.relation_type,
            RelationType::Manager | RelationType::Lead
        ) {
            supervised.insert(relation.to_id.as_str());
        }
        edges.push(HierarchyEdge {
            from: relation.from_id.clone(),
            to: relation.to_id.clone(),
            kind: HierarchyEdgeKind::Relation(relation.relation_type),
        });
    }

    // 无主管节点的兜底边；管理员本人挂在管理员框下
    let mut dept_boxes: HashMap<String, String> = HashMap::new();
    for employee in employees {
        if supervised.contains(employee.id.as_str()) {
            continue;
        }
        let department = employee.department.trim();
        let from = if employee.is_admin || department.is_empty() {
            ADMIN_BOX_ID.to_string()
        } else {
            dept_boxes
                .entry(department.to_string())
                .or_insert_with(|| dept_box_id(department))
                .clone()
        };
        edges.push(HierarchyEdge {
            from,
            to: employee.id.clone(),
            kind: HierarchyEdgeKind::Fallback,
        });
    }

    // 用到的部门框补成节点并挂到管理员框
    let mut departments: Vec<_> = dept_boxes.into_iter().collect();
    departments.sort();
    for (department, box_id) in departments {
        nodes.push(HierarchyNode {
            id: box_id.clone(),
            label: department.clone(),
            kind: HierarchyNodeKind::Department,
            department: Some(department),
        });
        edges.push(HierarchyEdge {
            from: ADMIN_BOX_ID.to_string(),
            to: box_id,
            kind: HierarchyEdgeKind::Fallback,
        });
    }

    (nodes, edges)
}

pub async fn get_hierarchy(
    service: &HierarchyService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let employees = match storage.list_all_employees().await {
        Ok(list) => list,
        Err(e) => {
            error!("Error listing employees: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to build hierarchy graph",
            )));
        }
    };

    let relations = match storage.list_relations().await {
        Ok(list) => list,
        Err(e) => {
            error!("Error listing relations: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to build hierarchy graph",
            )));
        }
    };

    let (nodes, edges) = build_hierarchy(&employees, &relations);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HierarchyGraphResponse { nodes, edges },
        "Hierarchy graph retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(
        id: &str,
        department: &str,
        is_manager: bool,
        is_lead: bool,
        is_admin: bool,
    ) -> Employee {
        Employee {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            first_name: id.to_string(),
            last_name: "Test".to_string(),
            department: department.to_string(),
            role: "Role".to_string(),
            is_manager,
            is_lead,
            is_admin,
            phone: None,
            profile_picture_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn relation(id: i64, from: &str, to: &str, relation_type: RelationType) -> EmployeeRelation {
        EmployeeRelation {
            id,
            from_id: from.to_string(),
            to_id: to.to_string(),
            relation_type,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_explicit_edges_suppress_fallback() {
        let employees = vec![
            employee("mgr", "Engineering", true, false, false),
            employee("dev", "Engineering", false, false, false),
        ];
        let relations = vec![relation(1, "mgr", "dev", RelationType::Manager)];

        let (nodes, edges) = build_hierarchy(&employees, &relations);

        // dev 有显式主管，不再生成兜底边
        assert!(edges.iter().any(|e| e.from == "mgr"
            && e.to == "dev"
            && e.kind == HierarchyEdgeKind::Relation(RelationType::Manager)));
        assert!(!edges
            .iter()
            .any(|e| e.to == "dev" && e.kind == HierarchyEdgeKind::Fallback));

        // mgr 无主管，兜底挂到部门框，部门框出现在节点里
        assert!(edges.iter().any(|e| e.from == "dept:Engineering"
            && e.to == "mgr"
            && e.kind == HierarchyEdgeKind::Fallback));
        assert!(nodes
            .iter()
            .any(|n| n.id == "dept:Engineering" && n.kind == HierarchyNodeKind::Department));
        assert!(edges
            .iter()
            .any(|e| e.from == ADMIN_BOX_ID && e.to == "dept:Engineering"));
    }

    #[test]
    fn test_departmentless_falls_back_to_admin_box() {
        let employees = vec![employee("solo", "", false, false, false)];

        let (_, edges) = build_hierarchy(&employees, &[]);
        assert_eq!(
            edges,
            vec![HierarchyEdge {
                from: ADMIN_BOX_ID.to_string(),
                to: "solo".to_string(),
                kind: HierarchyEdgeKind::Fallback,
            }]
        );
    }

    #[test]
    fn test_admin_hangs_under_admin_box() {
        let employees = vec![employee("admin", "HR", false, false, true)];

        let (nodes, edges) = build_hierarchy(&employees, &[]);
        assert!(edges
            .iter()
            .any(|e| e.from == ADMIN_BOX_ID && e.to == "admin"));
        // 管理员不占用部门框
        assert!(!nodes.iter().any(|n| n.id == "dept:HR"));
    }

    #[test]
    fn test_stale_relation_edges_dropped() {
        let employees = vec![employee("dev", "Engineering", false, false, false)];
        let relations = vec![relation(1, "ghost", "dev", RelationType::Manager)];

        let (_, edges) = build_hierarchy(&employees, &relations);
        // 过期边被丢弃后 dev 仍有兜底边，图不孤立
        assert!(!edges.iter().any(|e| e.from == "ghost"));
        assert!(edges
            .iter()
            .any(|e| e.to == "dev" && e.kind == HierarchyEdgeKind::Fallback));
    }

    #[test]
    fn test_colleague_edge_kept_but_not_supervision() {
        let employees = vec![
            employee("a", "Engineering", false, false, false),
            employee("b", "Engineering", false, false, false),
        ];
        let relations = vec![relation(1, "a", "b", RelationType::Colleague)];

        let (_, edges) = build_hierarchy(&employees, &relations);
        assert!(edges.iter().any(|e| e.from == "a"
            && e.to == "b"
            && e.kind == HierarchyEdgeKind::Relation(RelationType::Colleague)));
        // 同事边不算主管，b 依然拿到兜底边
        assert!(edges
            .iter()
            .any(|e| e.to == "b" && e.kind == HierarchyEdgeKind::Fallback));
    }

    #[test]
    fn test_node_kind_precedence() {
        let employees = vec![
            employee("admin", "HR", true, false, true),
            employee("mgr", "Engineering", true, true, false),
            employee("lead", "Engineering", false, true, false),
            employee("dev", "Engineering", false, false, false),
        ];

        let (nodes, _) = build_hierarchy(&employees, &[]);
        let kind = |id: &str| nodes.iter().find(|n| n.id == id).unwrap().kind;
        assert_eq!(kind("admin"), HierarchyNodeKind::Admin);
        assert_eq!(kind("mgr"), HierarchyNodeKind::Manager);
        assert_eq!(kind("lead"), HierarchyNodeKind::Lead);
        assert_eq!(kind("dev"), HierarchyNodeKind::Employee);
    }
}
