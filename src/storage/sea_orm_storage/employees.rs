use super::SeaOrmStorage;
use crate::entity::employee_courses::{Column as EmployeeCourseColumn, Entity as EmployeeCourses};
use crate::entity::employee_relations::{Column as RelationColumn, Entity as EmployeeRelations};
use crate::entity::employees::{ActiveModel, Column, Entity as Employees};
use crate::entity::prelude::Assignments;
use crate::errors::{HRSystemError, Result};
use crate::models::{
    PaginationInfo,
    employees::{
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
        responses::EmployeeListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

use crate::entity::assignments::Column as AssignmentColumn;

impl SeaOrmStorage {
    /// 创建员工
    pub async fn create_employee_impl(&self, req: CreateEmployeeRequest) -> Result<Employee> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(req.id),
            email: Set(req.email),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            department: Set(req.department),
            role: Set(req.role),
            is_manager: Set(req.is_manager),
            is_lead: Set(req.is_lead),
            is_admin: Set(req.is_admin),
            phone: Set(req.phone),
            profile_picture_url: Set(req.profile_picture_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create employee: {e}")))?;

        Ok(result.into_employee())
    }

    /// 通过 ID 获取员工
    pub async fn get_employee_by_id_impl(&self, id: &str) -> Result<Option<Employee>> {
        let result = Employees::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query employee: {e}")))?;

        Ok(result.map(|m| m.into_employee()))
    }

    /// 通过邮箱获取员工
    pub async fn get_employee_by_email_impl(&self, email: &str) -> Result<Option<Employee>> {
        let result = Employees::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query employee: {e}")))?;

        Ok(result.map(|m| m.into_employee()))
    }

    /// 分页列出员工
    pub async fn list_employees_with_pagination_impl(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Employees::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::Role.contains(&escaped)),
            );
        }

        // 部门筛选
        if let Some(ref department) = query.department {
            select = select.filter(Column::Department.eq(department));
        }

        // 标志位筛选
        if let Some(is_manager) = query.is_manager {
            select = select.filter(Column::IsManager.eq(is_manager));
        }
        if let Some(is_lead) = query.is_lead {
            select = select.filter(Column::IsLead.eq(is_lead));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to count employees: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to count employee pages: {e}")))?;

        let employees = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list employees: {e}")))?;

        Ok(EmployeeListResponse {
            items: employees.into_iter().map(|m| m.into_employee()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全量员工
    pub async fn list_all_employees_impl(&self) -> Result<Vec<Employee>> {
        let result = Employees::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list employees: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_employee()).collect())
    }

    /// 更新员工信息
    pub async fn update_employee_impl(
        &self,
        id: &str,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        // 先检查员工是否存在
        let existing = self.get_employee_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(role) = update.role {
            model.role = Set(role);
        }

        if let Some(is_manager) = update.is_manager {
            model.is_manager = Set(is_manager);
        }

        if let Some(is_lead) = update.is_lead {
            model.is_lead = Set(is_lead);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(profile_picture_url) = update.profile_picture_url {
            model.profile_picture_url = Set(Some(profile_picture_url));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update employee: {e}")))?;

        self.get_employee_by_id_impl(id).await
    }

    /// 删除员工，同一事务内级联清理关系边、评估任务与课程记录
    ///
    /// 问卷回复保留，作为审计记录不随员工删除。
    pub async fn delete_employee_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to begin transaction: {e}")))?;

        // 出边与入边一并删除
        EmployeeRelations::delete_many()
            .filter(
                Condition::any()
                    .add(RelationColumn::FromId.eq(id))
                    .add(RelationColumn::ToId.eq(id)),
            )
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete employee relations: {e}")))?;

        Assignments::delete_many()
            .filter(AssignmentColumn::EmployeeId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete employee assignments: {e}")))?;

        EmployeeCourses::delete_many()
            .filter(EmployeeCourseColumn::EmployeeId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete employee course records: {e}")))?;

        let result = Employees::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete employee: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to commit transaction: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新员工头像地址
    pub async fn update_employee_profile_picture_impl(&self, id: &str, url: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Employees::update_many()
            .col_expr(
                Column::ProfilePictureUrl,
                sea_orm::sea_query::Expr::value(url),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update employee profile picture: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
