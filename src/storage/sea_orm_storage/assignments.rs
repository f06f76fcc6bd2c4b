use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{HRSystemError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::AssignmentListQuery,
        responses::AssignmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 幂等写入单个评估任务
    ///
    /// ID 已存在时仅刷新 assigned_at，快照列保持首次分配时的值。
    pub async fn upsert_assignment_impl(
        &self,
        assignment: Assignment,
    ) -> Result<(Assignment, bool)> {
        let now = chrono::Utc::now().timestamp();
        let id = assignment.id.clone();
        let created = Self::upsert_assignment_on(&self.db, assignment, now).await?;

        let stored = Assignments::find_by_id(&id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query assignment: {e}")))?
            .ok_or_else(|| HRSystemError::database_operation("Assignment not found after insert"))?;

        Ok((stored.into_assignment(), created))
    }

    /// 同一事务内幂等写入一批评估任务，任一失败整体回滚
    pub async fn upsert_assignments_impl(&self, assignments: Vec<Assignment>) -> Result<usize> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to begin transaction: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let count = assignments.len();

        for assignment in assignments {
            Self::upsert_assignment_on(&txn, assignment, now).await?;
        }

        txn.commit()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to commit transaction: {e}")))?;

        Ok(count)
    }

    /// 通过 ID 获取评估任务
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query assignment: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出评估任务
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(ref employee_id) = query.employee_id {
            select = select.filter(Column::EmployeeId.eq(employee_id));
        }

        if let Some(ref form_id) = query.form_id {
            select = select.filter(Column::FormId.eq(form_id));
        }

        select = select.order_by_desc(Column::AssignedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to count assignments: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to count assignment pages: {e}"))
        })?;

        let assignments = paginator.fetch_page(page - 1).await.map_err(|e| {
            HRSystemError::database_operation(format!("Failed to list assignments: {e}"))
        })?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出某员工的全部评估任务
    pub async fn list_assignments_for_employee_impl(
        &self,
        employee_id: &str,
    ) -> Result<Vec<Assignment>> {
        let result = Assignments::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .order_by_desc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                HRSystemError::database_operation(format!("Failed to list assignments: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 在任意连接（含事务）上幂等写入评估任务，返回是否新建
    async fn upsert_assignment_on<C: ConnectionTrait>(
        conn: &C,
        assignment: Assignment,
        now: i64,
    ) -> Result<bool> {
        let existing = Assignments::find_by_id(&assignment.id)
            .one(conn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query assignment: {e}")))?;

        if existing.is_some() {
            let model = ActiveModel {
                id: Set(assignment.id),
                assigned_at: Set(now),
                ..Default::default()
            };
            model.update(conn).await.map_err(|e| {
                HRSystemError::database_operation(format!("Failed to refresh assignment: {e}"))
            })?;
            return Ok(false);
        }

        let target = assignment.evaluation_target;
        let model = ActiveModel {
            id: Set(assignment.id),
            form_id: Set(assignment.form_id),
            employee_id: Set(assignment.employee_id),
            employee_email: Set(assignment.employee_email),
            target_type: Set(target.as_ref().map(|t| t.target_type.to_string())),
            target_id: Set(target.as_ref().map(|t| t.target_id.clone())),
            target_name: Set(target.as_ref().map(|t| t.target_name.clone())),
            target_role: Set(target.as_ref().map(|t| t.target_role.clone())),
            target_department: Set(target.as_ref().map(|t| t.target_department.clone())),
            assigned_at: Set(now),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create assignment: {e}")))?;

        Ok(true)
    }
}
