//! 评估任务自动分配引擎
//!
//! 纯函数 [`compute_assignments`] 按组织关系跑五个互不重叠的遍历，
//! 产出确定性 ID 的任务草稿；持久化在存储层的同一事务内完成。

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FormService;
use crate::models::assignments::{
    entities::{Assignment, EvaluationTarget, EvaluationTargetType},
    responses::{AutoAssignBreakdown, AutoAssignResponse},
};
use crate::models::employees::entities::Employee;
use crate::models::forms::entities::{EMPLOYEE_FORM_ID, MANAGER_FORM_ID};
use crate::models::relations::entities::{EmployeeRelation, RelationType};
use crate::models::{ApiResponse, ErrorCode};

/// 任务草稿：尚未落库的评估任务及其来源遍历
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDraft {
    pub id: String,
    pub form_id: String,
    pub employee_id: String,
    pub employee_email: String,
    pub evaluation_target: EvaluationTarget,
    pub pass: AssignmentPass,
}

/// 产出草稿的遍历种类，决定 ID 前缀与统计口径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentPass {
    ManagerEvaluation,
    LeadEvaluation,
    EmployeeEvaluation,
    AdminEvaluation,
}

impl AssignmentPass {
    fn id_prefix(&self) -> &'static str {
        match self {
            AssignmentPass::ManagerEvaluation => "manager-eval",
            AssignmentPass::LeadEvaluation => "lead-eval",
            AssignmentPass::EmployeeEvaluation => "employee-eval",
            AssignmentPass::AdminEvaluation => "admin-eval",
        }
    }
}

fn draft_id(pass: AssignmentPass, evaluator_id: &str, target_id: &str, form_id: &str) -> String {
    format!("{}-{}-{}-{}", pass.id_prefix(), evaluator_id, target_id, form_id)
}

fn snapshot(
    target_type: EvaluationTargetType,
    target: &Employee,
    role: impl Into<String>,
) -> EvaluationTarget {
    EvaluationTarget {
        target_type,
        target_id: target.id.clone(),
        target_name: target.full_name(),
        target_role: role.into(),
        target_department: target.department.clone(),
    }
}

/// 按员工与关系边计算全部评估任务草稿
///
/// 五个遍历：
/// 1. 下属评经理：MANAGER 边、边源是经理、目标非 Lead，目标填 manager-form
/// 2. 组员评组长：LEAD 边、边源是 Lead、目标非经理，目标填 employee-form
/// 3. 经理评下属：MANAGER 边、边源是经理，边源填 employee-form
/// 4. 组长评组员：LEAD 边、边源是 Lead，边源填 employee-form
/// 5. 管理员评直属：管理员发出的 MANAGER/LEAD 边，管理员填 employee-form
///
/// 任一端员工已不存在的过期边直接跳过；同 ID 草稿去重保留先出现者。
pub fn compute_assignments(
    employees: &[Employee],
    relations: &[EmployeeRelation],
) -> Vec<AssignmentDraft> {
    let by_id: HashMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();
    let mut drafts: Vec<AssignmentDraft> = Vec::new();
    let push = |drafts: &mut Vec<AssignmentDraft>, draft: AssignmentDraft| {
        if !drafts.iter().any(|d| d.id == draft.id) {
            drafts.push(draft);
        }
    };

    // 遍历 1：下属评经理
    for relation in relations {
        if relation.relation_type != RelationType::Manager {
            continue;
        }
        let (Some(manager), Some(report)) = (
            by_id.get(relation.from_id.as_str()),
            by_id.get(relation.to_id.as_str()),
        ) else {
            continue;
        };
        if !manager.is_manager || report.is_lead {
            continue;
        }
        push(
            &mut drafts,
            AssignmentDraft {
                id: draft_id(
                    AssignmentPass::ManagerEvaluation,
                    &report.id,
                    &manager.id,
                    MANAGER_FORM_ID,
                ),
                form_id: MANAGER_FORM_ID.to_string(),
                employee_id: report.id.clone(),
                employee_email: report.email.clone(),
                evaluation_target: snapshot(EvaluationTargetType::Manager, manager, "Manager"),
                pass: AssignmentPass::ManagerEvaluation,
            },
        );
    }

    // 遍历 2：组员评组长
    for relation in relations {
        if relation.relation_type != RelationType::Lead {
            continue;
        }
        let (Some(lead), Some(member)) = (
            by_id.get(relation.from_id.as_str()),
            by_id.get(relation.to_id.as_str()),
        ) else {
            continue;
        };
        if !lead.is_lead || member.is_manager {
            continue;
        }
        push(
            &mut drafts,
            AssignmentDraft {
                id: draft_id(
                    AssignmentPass::LeadEvaluation,
                    &member.id,
                    &lead.id,
                    EMPLOYEE_FORM_ID,
                ),
                form_id: EMPLOYEE_FORM_ID.to_string(),
                employee_id: member.id.clone(),
                employee_email: member.email.clone(),
                evaluation_target: snapshot(EvaluationTargetType::Lead, lead, "Lead"),
                pass: AssignmentPass::LeadEvaluation,
            },
        );
    }

    // 遍历 3：经理评下属
    for relation in relations {
        if relation.relation_type != RelationType::Manager {
            continue;
        }
        let (Some(manager), Some(report)) = (
            by_id.get(relation.from_id.as_str()),
            by_id.get(relation.to_id.as_str()),
        ) else {
            continue;
        };
        if !manager.is_manager {
            continue;
        }
        let role = if report.role.trim().is_empty() {
            "Employee".to_string()
        } else {
            report.role.clone()
        };
        push(
            &mut drafts,
            AssignmentDraft {
                id: draft_id(
                    AssignmentPass::EmployeeEvaluation,
                    &manager.id,
                    &report.id,
                    EMPLOYEE_FORM_ID,
                ),
                form_id: EMPLOYEE_FORM_ID.to_string(),
                employee_id: manager.id.clone(),
                employee_email: manager.email.clone(),
                evaluation_target: snapshot(EvaluationTargetType::Employee, report, role),
                pass: AssignmentPass::EmployeeEvaluation,
            },
        );
    }

    // 遍历 4：组长评组员
    for relation in relations {
        if relation.relation_type != RelationType::Lead {
            continue;
        }
        let (Some(lead), Some(member)) = (
            by_id.get(relation.from_id.as_str()),
            by_id.get(relation.to_id.as_str()),
        ) else {
            continue;
        };
        if !lead.is_lead {
            continue;
        }
        let role = if member.role.trim().is_empty() {
            "Employee".to_string()
        } else {
            member.role.clone()
        };
        push(
            &mut drafts,
            AssignmentDraft {
                id: draft_id(
                    AssignmentPass::EmployeeEvaluation,
                    &lead.id,
                    &member.id,
                    EMPLOYEE_FORM_ID,
                ),
                form_id: EMPLOYEE_FORM_ID.to_string(),
                employee_id: lead.id.clone(),
                employee_email: lead.email.clone(),
                evaluation_target: snapshot(EvaluationTargetType::Employee, member, role),
                pass: AssignmentPass::EmployeeEvaluation,
            },
        );
    }

    // 遍历 5：管理员评直属
    if let Some(admin) = employees.iter().find(|e| e.is_admin) {
        for relation in relations {
            if relation.from_id != admin.id {
                continue;
            }
            if relation.relation_type == RelationType::Colleague {
                continue;
            }
            let Some(target) = by_id.get(relation.to_id.as_str()) else {
                continue;
            };
            push(
                &mut drafts,
                AssignmentDraft {
                    id: draft_id(
                        AssignmentPass::AdminEvaluation,
                        &admin.id,
                        &target.id,
                        EMPLOYEE_FORM_ID,
                    ),
                    form_id: EMPLOYEE_FORM_ID.to_string(),
                    employee_id: admin.id.clone(),
                    employee_email: admin.email.clone(),
                    evaluation_target: snapshot(
                        EvaluationTargetType::Employee,
                        target,
                        target.display_role(),
                    ),
                    pass: AssignmentPass::AdminEvaluation,
                },
            );
        }
    }

    drafts
}

/// 按遍历种类统计草稿
pub fn breakdown(drafts: &[AssignmentDraft]) -> AutoAssignBreakdown {
    let count = |pass: AssignmentPass| drafts.iter().filter(|d| d.pass == pass).count();
    AutoAssignBreakdown {
        manager_evaluations: count(AssignmentPass::ManagerEvaluation),
        lead_evaluations: count(AssignmentPass::LeadEvaluation),
        employee_evaluations: count(AssignmentPass::EmployeeEvaluation),
        admin_evaluations: count(AssignmentPass::AdminEvaluation),
    }
}

pub async fn auto_assign(service: &FormService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 两张内置表单缺一不可，缺失时点名报错
    for form_id in [MANAGER_FORM_ID, EMPLOYEE_FORM_ID] {
        match storage.get_form_by_id(form_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::CanonicalFormMissing,
                    format!("Canonical form {form_id} is missing, cannot auto-assign"),
                )));
            }
            Err(e) => {
                error!("Error querying form: {}", e);
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(ErrorCode::AutoAssignFailed, "Auto-assignment failed"),
                ));
            }
        }
    }

    let employees = match storage.list_all_employees().await {
        Ok(list) => list,
        Err(e) => {
            error!("Error listing employees: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::AutoAssignFailed, "Auto-assignment failed")));
        }
    };

    if !employees.iter().any(|e| e.is_admin) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No admin employee found, cannot auto-assign",
        )));
    }

    let relations = match storage.list_relations().await {
        Ok(list) => list,
        Err(e) => {
            error!("Error listing relations: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::AutoAssignFailed, "Auto-assignment failed")));
        }
    };

    let drafts = compute_assignments(&employees, &relations);

    if drafts.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoEvaluationCandidates,
            "No managers or leads found",
        )));
    }

    let stats = breakdown(&drafts);
    let now = chrono::Utc::now();
    let assignments: Vec<Assignment> = drafts
        .into_iter()
        .map(|d| Assignment {
            id: d.id,
            form_id: d.form_id,
            employee_id: d.employee_id,
            employee_email: d.employee_email,
            evaluation_target: Some(d.evaluation_target),
            assigned_at: now,
        })
        .collect();

    // 同一事务内幂等落库，重复运行只刷新 assigned_at
    match storage.upsert_assignments(assignments).await {
        Ok(count) => {
            info!(
                "Auto-assignment finished with {} assignments (manager {}, lead {}, report {}, admin {})",
                count,
                stats.manager_evaluations,
                stats.lead_evaluations,
                stats.employee_evaluations,
                stats.admin_evaluations
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AutoAssignResponse {
                    assignments: count,
                    breakdown: stats,
                },
                "Auto-assignment completed successfully",
            )))
        }
        Err(e) => {
            error!("Error persisting auto-assignment: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::AutoAssignFailed, "Auto-assignment failed")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(
        id: &str,
        department: &str,
        role: &str,
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
            role: role.to_string(),
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
    fn test_manager_pass_bottom_up_and_top_down() {
        let employees = vec![
            employee("mgr", "Engineering", "Engineering Manager", true, false, false),
            employee("dev", "Engineering", "Engineer", false, false, false),
        ];
        let relations = vec![relation(1, "mgr", "dev", RelationType::Manager)];

        let drafts = compute_assignments(&employees, &relations);
        assert_eq!(drafts.len(), 2);

        // 下属评经理
        let up = drafts
            .iter()
            .find(|d| d.id == "manager-eval-dev-mgr-manager-form")
            .unwrap();
        assert_eq!(up.employee_id, "dev");
        assert_eq!(up.form_id, MANAGER_FORM_ID);
        assert_eq!(up.evaluation_target.target_type, EvaluationTargetType::Manager);
        assert_eq!(up.evaluation_target.target_role, "Manager");

        // 经理评下属
        let down = drafts
            .iter()
            .find(|d| d.id == "employee-eval-mgr-dev-employee-form")
            .unwrap();
        assert_eq!(down.employee_id, "mgr");
        assert_eq!(down.form_id, EMPLOYEE_FORM_ID);
        assert_eq!(down.evaluation_target.target_role, "Engineer");
    }

    #[test]
    fn test_lead_target_skipped_in_manager_pass() {
        // 目标本身是 Lead 时不给它派经理评估
        let employees = vec![
            employee("mgr", "Engineering", "Manager", true, false, false),
            employee("lead", "Engineering", "Tech Lead", false, true, false),
        ];
        let relations = vec![relation(1, "mgr", "lead", RelationType::Manager)];

        let drafts = compute_assignments(&employees, &relations);
        assert!(!drafts.iter().any(|d| d.pass == AssignmentPass::ManagerEvaluation));
        // 自上而下的评估仍然生成
        assert!(drafts.iter().any(|d| d.pass == AssignmentPass::EmployeeEvaluation));
    }

    #[test]
    fn test_lead_passes() {
        let employees = vec![
            employee("lead", "Engineering", "Tech Lead", false, true, false),
            employee("dev", "Engineering", "Engineer", false, false, false),
        ];
        let relations = vec![relation(1, "lead", "dev", RelationType::Lead)];

        let drafts = compute_assignments(&employees, &relations);
        assert_eq!(drafts.len(), 2);
        assert!(drafts.iter().any(|d| d.id == "lead-eval-dev-lead-employee-form"));
        assert!(drafts.iter().any(|d| d.id == "employee-eval-lead-dev-employee-form"));
    }

    #[test]
    fn test_admin_pass_uses_display_role() {
        let employees = vec![
            employee("admin", "HR", "Head of People", true, false, true),
            employee("mgr", "Engineering", "Manager", true, false, false),
            employee("dev", "Engineering", "Engineer", false, false, false),
        ];
        let relations = vec![
            relation(1, "admin", "mgr", RelationType::Manager),
            relation(2, "admin", "dev", RelationType::Lead),
        ];

        let drafts = compute_assignments(&employees, &relations);
        let admin_drafts: Vec<_> = drafts
            .iter()
            .filter(|d| d.pass == AssignmentPass::AdminEvaluation)
            .collect();
        assert_eq!(admin_drafts.len(), 2);

        let mgr_draft = admin_drafts
            .iter()
            .find(|d| d.evaluation_target.target_id == "mgr")
            .unwrap();
        assert_eq!(mgr_draft.evaluation_target.target_role, "Manager");

        let dev_draft = admin_drafts
            .iter()
            .find(|d| d.evaluation_target.target_id == "dev")
            .unwrap();
        assert_eq!(dev_draft.evaluation_target.target_role, "Employee");
    }

    #[test]
    fn test_stale_edges_skipped() {
        let employees = vec![employee("mgr", "Engineering", "Manager", true, false, false)];
        let relations = vec![relation(1, "mgr", "ghost", RelationType::Manager)];

        assert!(compute_assignments(&employees, &relations).is_empty());
    }

    #[test]
    fn test_duplicate_edges_deduplicate_by_id() {
        let employees = vec![
            employee("mgr", "Engineering", "Manager", true, false, false),
            employee("dev", "Engineering", "Engineer", false, false, false),
        ];
        // 同一对端点的重复 MANAGER 边
        let relations = vec![
            relation(1, "mgr", "dev", RelationType::Manager),
            relation(2, "mgr", "dev", RelationType::Manager),
        ];

        let drafts = compute_assignments(&employees, &relations);
        assert_eq!(drafts.len(), 2);
    }

    #[test]
    fn test_colleague_edges_ignored() {
        let employees = vec![
            employee("a", "Engineering", "Engineer", false, false, false),
            employee("b", "Engineering", "Engineer", false, false, false),
        ];
        let relations = vec![relation(1, "a", "b", RelationType::Colleague)];

        assert!(compute_assignments(&employees, &relations).is_empty());
    }

    #[test]
    fn test_breakdown_counts() {
        let employees = vec![
            employee("admin", "HR", "Head", false, false, true),
            employee("mgr", "Engineering", "Manager", true, false, false),
            employee("lead", "Engineering", "Tech Lead", false, true, false),
            employee("dev", "Engineering", "Engineer", false, false, false),
        ];
        let relations = vec![
            relation(1, "mgr", "dev", RelationType::Manager),
            relation(2, "lead", "dev", RelationType::Lead),
            relation(3, "admin", "mgr", RelationType::Manager),
        ];

        let drafts = compute_assignments(&employees, &relations);
        let stats = breakdown(&drafts);
        assert_eq!(stats.manager_evaluations, 1);
        assert_eq!(stats.lead_evaluations, 1);
        assert_eq!(stats.employee_evaluations, 2);
        assert_eq!(stats.admin_evaluations, 1);
    }
}
