use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::OnboardingService;
use crate::middlewares::RequireJWT;
use crate::models::employees::entities::Employee;
use crate::models::onboarding::{
    entities::{ManagerResolution, OnboardingStatus},
    responses::ApprovalResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// 按姓名解析上级
///
/// 先做 "名 姓" 全名精确匹配，再退回唯一名字匹配。
/// 多个候选时返回 Ambiguous 供审批人自行处理，不静默挑选。
pub fn resolve_manager(employees: &[Employee], manager_name: Option<&str>) -> ManagerResolution {
    let Some(name) = manager_name.map(str::trim).filter(|n| !n.is_empty()) else {
        return ManagerResolution::NotRequested;
    };

    let lowered = name.to_lowercase();

    // 全名精确匹配
    let exact: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.full_name().to_lowercase() == lowered)
        .collect();

    match exact.len() {
        1 => {
            return ManagerResolution::Resolved {
                employee_id: exact[0].id.clone(),
            };
        }
        n if n > 1 => {
            return ManagerResolution::Ambiguous {
                candidate_ids: exact.iter().map(|e| e.id.clone()).collect(),
            };
        }
        _ => {}
    }

    // 退回名字匹配，唯一命中才算解析成功
    let by_first: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.first_name.to_lowercase() == lowered)
        .collect();

    match by_first.len() {
        0 => ManagerResolution::NotFound,
        1 => ManagerResolution::Resolved {
            employee_id: by_first[0].id.clone(),
        },
        _ => ManagerResolution::Ambiguous {
            candidate_ids: by_first.iter().map(|e| e.id.clone()).collect(),
        },
    }
}

/// 计算新 Lead 的扇出对象：同部门、非 Lead、非本人
pub fn lead_fanout_targets(
    employees: &[Employee],
    department: &str,
    new_employee_id: &str,
) -> Vec<String> {
    employees
        .iter()
        .filter(|e| e.department == department && !e.is_lead && e.id != new_employee_id)
        .map(|e| e.id.clone())
        .collect()
}

pub async fn approve_request(
    service: &OnboardingService,
    request_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let approver_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    let onboarding = match storage.get_onboarding_request_by_id(request_id).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::OnboardingRequestNotFound,
                "Onboarding request not found",
            )));
        }
        Err(e) => {
            error!("Error querying onboarding request: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to approve onboarding request",
                )),
            );
        }
    };

    if onboarding.status != OnboardingStatus::Pending {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::OnboardingNotPending,
            "Onboarding request is not pending",
        )));
    }

    // 解析上级与 Lead 扇出都基于审批时点的员工快照
    let employees = match storage.list_all_employees().await {
        Ok(list) => list,
        Err(e) => {
            error!("Error listing employees: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to approve onboarding request",
                )),
            );
        }
    };

    let resolution = resolve_manager(&employees, onboarding.manager_name.as_deref());
    let manager_id = match &resolution {
        ManagerResolution::Resolved { employee_id } => Some(employee_id.clone()),
        // Ambiguous/NotFound 不阻断审批，结果随响应返回
        _ => None,
    };

    let lead_report_ids = if onboarding.is_lead {
        lead_fanout_targets(&employees, &onboarding.department, &onboarding.user_id)
    } else {
        Vec::new()
    };
    let lead_edges_created = lead_report_ids.len();

    match storage
        .approve_onboarding(request_id, &approver_id, manager_id, lead_report_ids)
        .await
    {
        Ok(Some(employee)) => {
            info!(
                "Onboarding request {} approved, manager resolution: {:?}",
                request_id, resolution
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ApprovalResponse {
                    employee,
                    manager_resolution: resolution,
                    lead_edges_created,
                },
                "Onboarding request approved",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::OnboardingRequestNotFound,
            "Onboarding request not found",
        ))),
        Err(e) => {
            error!("Error approving onboarding request: {}", e);
            // 并发下状态可能已被其它审批改掉
            if matches!(e, crate::errors::HRSystemError::Conflict(_)) {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::OnboardingNotPending,
                    "Onboarding request is not pending",
                )));
            }
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to approve onboarding request",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, first: &str, last: &str, department: &str, is_lead: bool) -> Employee {
        Employee {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: department.to_string(),
            role: "Engineer".to_string(),
            is_manager: false,
            is_lead,
            is_admin: false,
            phone: None,
            profile_picture_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_resolve_manager_exact_full_name() {
        let employees = vec![
            employee("m1", "Alice", "Wang", "Engineering", false),
            employee("m2", "Alice", "Chen", "Engineering", false),
        ];
        let resolution = resolve_manager(&employees, Some("Alice Wang"));
        assert_eq!(
            resolution,
            ManagerResolution::Resolved {
                employee_id: "m1".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_manager_unique_first_name_fallback() {
        let employees = vec![
            employee("m1", "Alice", "Wang", "Engineering", false),
            employee("m2", "Bob", "Chen", "Engineering", false),
        ];
        let resolution = resolve_manager(&employees, Some("Bob"));
        assert_eq!(
            resolution,
            ManagerResolution::Resolved {
                employee_id: "m2".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_manager_ambiguous() {
        let employees = vec![
            employee("m1", "Alice", "Wang", "Engineering", false),
            employee("m2", "Alice", "Chen", "Sales", false),
        ];
        let resolution = resolve_manager(&employees, Some("Alice"));
        assert_eq!(
            resolution,
            ManagerResolution::Ambiguous {
                candidate_ids: vec!["m1".to_string(), "m2".to_string()]
            }
        );
    }

    #[test]
    fn test_resolve_manager_not_found() {
        let employees = vec![employee("m1", "Alice", "Wang", "Engineering", false)];
        assert_eq!(
            resolve_manager(&employees, Some("Carol")),
            ManagerResolution::NotFound
        );
    }

    #[test]
    fn test_resolve_manager_not_requested() {
        let employees = vec![employee("m1", "Alice", "Wang", "Engineering", false)];
        assert_eq!(
            resolve_manager(&employees, None),
            ManagerResolution::NotRequested
        );
        assert_eq!(
            resolve_manager(&employees, Some("  ")),
            ManagerResolution::NotRequested
        );
    }

    #[test]
    fn test_lead_fanout_same_department_non_leads() {
        let employees = vec![
            employee("e1", "Alice", "Wang", "Engineering", false),
            employee("e2", "Bob", "Chen", "Engineering", true),
            employee("e3", "Carol", "Li", "Sales", false),
            employee("new-lead", "Dave", "Zhao", "Engineering", false),
        ];
        let targets = lead_fanout_targets(&employees, "Engineering", "new-lead");
        assert_eq!(targets, vec!["e1".to_string()]);
    }
}
