use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::employee_courses::{
    ActiveModel as EmployeeCourseActiveModel, Column as EmployeeCourseColumn,
    Entity as EmployeeCourses,
};
use crate::errors::{HRSystemError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseStatus, EmployeeCourse, EmployeeCourseStatus},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseListResponse, EmployeeCourseItem},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait, sea_query::OnConflict,
};

/// (employee_id, course_id) 唯一对上的冲突子句：只刷新分配时间
fn course_pair_conflict() -> OnConflict {
    OnConflict::columns([EmployeeCourseColumn::EmployeeId, EmployeeCourseColumn::CourseId])
        .update_columns([EmployeeCourseColumn::AssignedAt, EmployeeCourseColumn::UpdatedAt])
        .to_owned()
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            course_type: Set(req.course_type.to_string()),
            status: Set(req.status.unwrap_or(CourseStatus::Active).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create course: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query course: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        if let Some(ref course_type) = query.course_type {
            select = select.filter(Column::CourseType.eq(course_type.to_string()));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to count courses: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to count course pages: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list courses: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(course_type) = update.course_type {
            model.course_type = Set(course_type.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update course: {e}")))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程，同一事务内级联删除分配记录
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to begin transaction: {e}")))?;

        EmployeeCourses::delete_many()
            .filter(EmployeeCourseColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete course assignments: {e}")))?;

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to delete course: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to commit transaction: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 幂等分配课程
    ///
    /// (employee_id, course_id) 已存在时只刷新 assigned_at，状态保持不变。
    /// 冲突在数据库层解决，并发重复分配收敛到同一行、较晚的 assigned_at 胜出。
    pub async fn assign_course_impl(
        &self,
        employee_id: &str,
        course_id: i64,
    ) -> Result<(EmployeeCourse, bool)> {
        let now = chrono::Utc::now().timestamp();

        let existing = EmployeeCourses::find()
            .filter(EmployeeCourseColumn::EmployeeId.eq(employee_id))
            .filter(EmployeeCourseColumn::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query course assignment: {e}")))?;
        let created = existing.is_none();

        let model = EmployeeCourseActiveModel {
            employee_id: Set(employee_id.to_string()),
            course_id: Set(course_id),
            status: Set(EmployeeCourseStatus::Assigned.to_string()),
            assigned_at: Set(now),
            updated_at: Set(now),
            completed_at: Set(None),
            ..Default::default()
        };

        EmployeeCourses::insert(model)
            .on_conflict(course_pair_conflict())
            .exec(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to create course assignment: {e}")))?;

        let record = EmployeeCourses::find()
            .filter(EmployeeCourseColumn::EmployeeId.eq(employee_id))
            .filter(EmployeeCourseColumn::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query course assignment: {e}")))?
            .ok_or_else(|| {
                HRSystemError::database_operation(
                    "Course assignment not found after insert".to_string(),
                )
            })?;

        Ok((record.into_employee_course(), created))
    }

    /// 通过 ID 获取课程分配记录
    pub async fn get_course_assignment_by_id_impl(&self, id: i64) -> Result<Option<EmployeeCourse>> {
        let result = EmployeeCourses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query course assignment: {e}")))?;

        Ok(result.map(|m| m.into_employee_course()))
    }

    /// 更新课程分配状态，completed 时写入 completed_at
    pub async fn update_course_assignment_status_impl(
        &self,
        id: i64,
        status: EmployeeCourseStatus,
    ) -> Result<Option<EmployeeCourse>> {
        let existing = self.get_course_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let completed_at = if status == EmployeeCourseStatus::Completed {
            Some(now)
        } else {
            None
        };

        let model = EmployeeCourseActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            completed_at: Set(completed_at),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to update course assignment: {e}")))?;

        Ok(Some(updated.into_employee_course()))
    }

    /// 列出某员工的课程及状态
    pub async fn list_employee_courses_impl(
        &self,
        employee_id: &str,
    ) -> Result<Vec<EmployeeCourseItem>> {
        let records = EmployeeCourses::find()
            .filter(EmployeeCourseColumn::EmployeeId.eq(employee_id))
            .order_by_desc(EmployeeCourseColumn::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to query course assignment: {e}")))?;

        let courses = Courses::find()
            .all(&self.db)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Failed to list courses: {e}")))?;

        let by_id: HashMap<i64, Course> = courses
            .into_iter()
            .map(|m| (m.id, m.into_course()))
            .collect();

        let items = records
            .into_iter()
            .filter_map(|record| {
                let course = by_id.get(&record.course_id)?.clone();
                Some(EmployeeCourseItem {
                    course,
                    assignment: record.into_employee_course(),
                })
            })
            .collect();

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_assign_course_converges_on_duplicate_pair() {
        // 并发分配同一 (employee, course) 时收敛到同一行，
        // 只有 assigned_at / updated_at 被较晚的调用刷新，状态不被重置
        let model = EmployeeCourseActiveModel {
            employee_id: Set("dev".to_string()),
            course_id: Set(1),
            status: Set(EmployeeCourseStatus::Assigned.to_string()),
            assigned_at: Set(0),
            updated_at: Set(0),
            completed_at: Set(None),
            ..Default::default()
        };

        let sql = EmployeeCourses::insert(model)
            .on_conflict(course_pair_conflict())
            .build(DbBackend::Sqlite)
            .to_string();

        assert!(sql.contains("ON CONFLICT"));
        assert!(sql.contains("assigned_at"));
        assert!(!sql.contains("DO NOTHING"));
        assert!(!sql.to_lowercase().contains("\"status\" = "));
    }
}
