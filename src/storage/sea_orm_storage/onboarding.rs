use super::SeaOrmStorage;
use crate::entity::employee_relations::{
    ActiveModel as RelationActiveModel, Column as RelationColumn, Entity as EmployeeRelations,
};
use crate::entity::employees::{ActiveModel as EmployeeActiveModel, Entity as Employees};
use crate::entity::onboarding_requests::{ActiveModel, Column, Entity as OnboardingRequests};
use crate::errors::{HRSystemError, Result};
use crate::models::{
    PaginationInfo,
    employees::entities::{ADMIN_ROLE, Employee},
    onboarding::{
        entities::{OnboardingRequest, OnboardingStatus},
        requests::{OnboardingListQuery, SubmitOnboardingRequest},
        responses::OnboardingListResponse,
    },
    relations::entities::RelationType,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, sea_query::OnConflict,
};

/// 构造一行处于待审批状态的入职申请
fn pending_request_model(
    user_id: &str,
    auth_role: &str,
    req: SubmitOnboardingRequest,
    profile_picture_url: Option<String>,
    now: i64,
) -> ActiveModel {
    ActiveModel {
        user_id: Set(user_id.to_string()),
        email: Set(req.email),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        department: Set(req.department),
        role: Set(req.role),
        auth_role: Set(auth_role.to_string()),
        phone: Set(req.phone),
        is_manager: Set(req.is_manager),
        is_lead: Set(req.is_lead),
        manager_name: Set(req.manager_name),
        profile_picture_url: Set(profile_picture_url),
        status: Set(OnboardingStatus::Pending.to_string()),
        approved_at: Set(None),
        approved_by: Set(None),
        created_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 提交入职申请
    ///
    /// user_id 带唯一约束：被驳回后重新提交时复用原行，
    /// 状态重置回待审批并清空审批记录，而不是插入第二行。
    pub async fn create_onboarding_request_impl(
        &self,
        user_id: &str,
        auth_role: &str,
        req: SubmitOnboardingRequest,
        profile_picture_url: Option<String>,
    ) -> Result<OnboardingRequest> {
        let now = chrono::Utc::now().timestamp();

        let existing = OnboardingRequests::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query onboarding request: {e}")))?;

        let mut model = pending_request_model(user_id, auth_role, req, profile_picture_url, now);

        let result = if let Some(existing) = existing {
            model.id = Set(existing.id);
            model
                .update(&self.db)
                .await
                .map_err(|e| HRSystemError::database_operation(format!("Failed to reset onboarding request: {e}")))?
        } else {
            model
                .insert(&self.db)
                .await
                .map_err(|e| HRSystemError::database_operation(format!("Failed to create onboarding request: {e}")))?
        };

        Ok(result.into_request())
    }

    /// 通过 ID 获取入职申请
    pub async fn get_onboarding_request_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<OnboardingRequest>> {
        let result = OnboardingRequests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query onboarding request: {e}")))?;

        Ok(result.map(|m| m.into_request()))
    }

    /// 获取某用户最近一次入职申请
    pub async fn get_onboarding_request_by_user_id_impl(
        &self,
        user_id: &str,
    ) -> Result<Option<OnboardingRequest>> {
        let result = OnboardingRequests::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query onboarding request: {e}")))?;

        Ok(result.map(|m| m.into_request()))
    }

    /// 分页列出入职申请
    pub async fn list_onboarding_requests_with_pagination_impl(
        &self,
        query: OnboardingListQuery,
    ) -> Result<OnboardingListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = OnboardingRequests::find();

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to count onboarding requests: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to count onboarding request pages: {e}"))
        })?;

        let requests = paginator.fetch_page(page - 1).await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to list onboarding requests: {e}"))
        })?;

        Ok(OnboardingListResponse {
            items: requests.into_iter().map(|m| m.into_request()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 批准入职申请
    ///
    /// 同一事务内完成：按 user_id 幂等落库员工、标记申请已批准、
    /// 写入上级边（若已解析出上级）、为新 Lead 写入同部门扇出边。
    /// 任一步失败整体回滚。
    pub async fn approve_onboarding_impl(
        &self,
        request_id: i64,
        approver_id: &str,
        manager_id: Option<String>,
        lead_report_ids: Vec<String>,
    ) -> Result<Option<Employee>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to begin transaction: {e}")))?;

        let Some(request) = OnboardingRequests::find_by_id(request_id)
            .one(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query onboarding request: {e}")))?
        else {
            return Ok(None);
        };

        // 并发批准的竞争防线，状态在服务层已校验过一次
        if request.status != OnboardingStatus::Pending.to_string() {
            return Err(HRSystemError::conflict("Onboarding request is not pending"));
        }

        let now = chrono::Utc::now().timestamp();
        let user_id = request.user_id.clone();
        let department = request.department.clone();
        let is_lead = request.is_lead;

        // 按 user_id 幂等落库员工
        let existing = Employees::find_by_id(&user_id)
            .one(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query employee: {e}")))?;

        let employee_model = EmployeeActiveModel {
            id: Set(user_id.clone()),
            email: Set(request.email.clone()),
            first_name: Set(request.first_name.clone()),
            last_name: Set(request.last_name.clone()),
            department: Set(request.department.clone()),
            role: Set(request.role.clone()),
            is_manager: Set(request.is_manager),
            is_lead: Set(request.is_lead),
            // 首次落库时以提交令牌的角色声明为准，之后保留既有标记
            is_admin: Set(existing
                .as_ref()
                .map(|m| m.is_admin)
                .unwrap_or(request.auth_role == ADMIN_ROLE)),
            phone: Set(request.phone.clone()),
            profile_picture_url: Set(request.profile_picture_url.clone()),
            created_at: Set(existing.as_ref().map(|m| m.created_at).unwrap_or(now)),
            updated_at: Set(now),
        };

        let employee = if existing.is_some() {
            employee_model
                .update(&txn)
                .await
                .map_err(|e| HRSystemError::database_operation(format!("Failed to update employee: {e}")))?
        } else {
            employee_model
                .insert(&txn)
                .await
                .map_err(|e| HRSystemError::database_operation(format!("Failed to create employee: {e}")))?
        };

        // 标记申请已批准
        let request_update = ActiveModel {
            id: Set(request_id),
            status: Set(OnboardingStatus::Approved.to_string()),
            approved_at: Set(Some(now)),
            approved_by: Set(Some(approver_id.to_string())),
            ..Default::default()
        };
        request_update
            .update(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update onboarding request: {e}")))?;

        // 上级边：manager → 新员工
        if let Some(manager_id) = manager_id {
            Self::upsert_relation_in_txn(&txn, &manager_id, &user_id, RelationType::Manager, now)
                .await?;
        }

        // Lead 扇出：新 Lead → 同部门非 Lead 员工
        if is_lead {
            for report_id in &lead_report_ids {
                Self::upsert_relation_in_txn(&txn, &user_id, report_id, RelationType::Lead, now)
                    .await?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to commit transaction: {e}")))?;

        tracing::info!(
            "Onboarding request {} approved, employee {} stored in department {}",
            request_id,
            user_id,
            department
        );

        Ok(Some(employee.into_employee()))
    }

    /// 驳回入职申请
    pub async fn reject_onboarding_impl(
        &self,
        request_id: i64,
        approver_id: &str,
    ) -> Result<Option<OnboardingRequest>> {
        let existing = self.get_onboarding_request_by_id_impl(request_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(request_id),
            status: Set(OnboardingStatus::Rejected.to_string()),
            approved_at: Set(Some(chrono::Utc::now().timestamp())),
            approved_by: Set(Some(approver_id.to_string())),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update onboarding request: {e}")))?;

        self.get_onboarding_request_by_id_impl(request_id).await
    }

    /// 事务内幂等写入关系边
    async fn upsert_relation_in_txn(
        txn: &DatabaseTransaction,
        from_id: &str,
        to_id: &str,
        relation_type: RelationType,
        now: i64,
    ) -> Result<()> {
        let model = RelationActiveModel {
            from_id: Set(from_id.to_string()),
            to_id: Set(to_id.to_string()),
            relation_type: Set(relation_type.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        match EmployeeRelations::insert(model)
            .on_conflict(
                OnConflict::columns([
                    RelationColumn::FromId,
                    RelationColumn::ToId,
                    RelationColumn::RelationType,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(txn)
            .await
        {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(HRSystemError::database_operation(format!(
                "Failed to create relation: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_request() -> SubmitOnboardingRequest {
        SubmitOnboardingRequest {
            email: "jane.doe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            department: "Engineering".into(),
            role: "Engineer".into(),
            phone: None,
            is_manager: false,
            is_lead: false,
            manager_name: None,
        }
    }

    #[test]
    fn test_pending_model_resets_state_for_resubmission() {
        // 复用被驳回的行时，状态与审批记录必须一并重置
        let model = pending_request_model("u1", "employee", submit_request(), None, 1_700_000_000);

        assert!(model.id.is_not_set());
        assert_eq!(model.status.clone().unwrap(), OnboardingStatus::Pending.to_string());
        assert_eq!(model.approved_at.clone().unwrap(), None);
        assert_eq!(model.approved_by.clone().unwrap(), None);
        assert_eq!(model.created_at.clone().unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_pending_model_keeps_auth_role_claim() {
        let model = pending_request_model("hr-root", "admin", submit_request(), None, 0);
        assert_eq!(model.auth_role.clone().unwrap(), "admin");
    }
}
