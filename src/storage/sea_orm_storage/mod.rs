//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod employees;
mod forms;
mod onboarding;
mod relations;
mod responses;

use crate::config::AppConfig;
use crate::errors::{HRSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| HRSystemError::database_operation(format!("Database migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| HRSystemError::database_config(format!("Failed to parse SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| HRSystemError::database_connection(format!("Failed to open SQLite database: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| HRSystemError::database_connection(format!("Failed to connect to database: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(HRSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use std::collections::BTreeMap;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::AssignmentListQuery,
        responses::AssignmentListResponse,
    },
    courses::{
        entities::{Course, EmployeeCourse, EmployeeCourseStatus},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseListResponse, EmployeeCourseItem},
    },
    employees::{
        entities::Employee,
        requests::{CreateEmployeeRequest, EmployeeListQuery, UpdateEmployeeRequest},
        responses::EmployeeListResponse,
    },
    forms::{
        entities::Form,
        requests::{CreateFormRequest, UpdateFormRequest},
    },
    onboarding::{
        entities::OnboardingRequest,
        requests::{OnboardingListQuery, SubmitOnboardingRequest},
        responses::OnboardingListResponse,
    },
    relations::{
        entities::{EmployeeRelation, RelationWithEmployees},
        requests::{UpdateRelationRequest, UpsertRelationRequest},
    },
    responses::entities::FormResponse,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 员工模块
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee> {
        self.create_employee_impl(employee).await
    }

    async fn get_employee_by_id(&self, id: &str) -> Result<Option<Employee>> {
        self.get_employee_by_id_impl(id).await
    }

    async fn get_employee_by_email(&self, email: &str) -> Result<Option<Employee>> {
        self.get_employee_by_email_impl(email).await
    }

    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse> {
        self.list_employees_with_pagination_impl(query).await
    }

    async fn list_all_employees(&self) -> Result<Vec<Employee>> {
        self.list_all_employees_impl().await
    }

    async fn update_employee(
        &self,
        id: &str,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>> {
        self.update_employee_impl(id, update).await
    }

    async fn delete_employee(&self, id: &str) -> Result<bool> {
        self.delete_employee_impl(id).await
    }

    async fn update_employee_profile_picture(&self, id: &str, url: &str) -> Result<bool> {
        self.update_employee_profile_picture_impl(id, url).await
    }

    // 关系图模块
    async fn upsert_relation(
        &self,
        relation: UpsertRelationRequest,
    ) -> Result<(EmployeeRelation, bool)> {
        self.upsert_relation_impl(relation).await
    }

    async fn get_relation_by_id(&self, id: i64) -> Result<Option<EmployeeRelation>> {
        self.get_relation_by_id_impl(id).await
    }

    async fn list_relations(&self) -> Result<Vec<EmployeeRelation>> {
        self.list_relations_impl().await
    }

    async fn list_relations_with_employees(&self) -> Result<Vec<RelationWithEmployees>> {
        self.list_relations_with_employees_impl().await
    }

    async fn update_relation(
        &self,
        id: i64,
        update: UpdateRelationRequest,
    ) -> Result<Option<EmployeeRelation>> {
        self.update_relation_impl(id, update).await
    }

    async fn delete_relation(&self, id: i64) -> Result<bool> {
        self.delete_relation_impl(id).await
    }

    // 入职模块
    async fn create_onboarding_request(
        &self,
        user_id: &str,
        auth_role: &str,
        request: SubmitOnboardingRequest,
        profile_picture_url: Option<String>,
    ) -> Result<OnboardingRequest> {
        self.create_onboarding_request_impl(user_id, auth_role, request, profile_picture_url)
            .await
    }

    async fn get_onboarding_request_by_id(&self, id: i64) -> Result<Option<OnboardingRequest>> {
        self.get_onboarding_request_by_id_impl(id).await
    }

    async fn get_onboarding_request_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<OnboardingRequest>> {
        self.get_onboarding_request_by_user_id_impl(user_id).await
    }

    async fn list_onboarding_requests_with_pagination(
        &self,
        query: OnboardingListQuery,
    ) -> Result<OnboardingListResponse> {
        self.list_onboarding_requests_with_pagination_impl(query)
            .await
    }

    async fn approve_onboarding(
        &self,
        request_id: i64,
        approver_id: &str,
        manager_id: Option<String>,
        lead_report_ids: Vec<String>,
    ) -> Result<Option<Employee>> {
        self.approve_onboarding_impl(request_id, approver_id, manager_id, lead_report_ids)
            .await
    }

    async fn reject_onboarding(
        &self,
        request_id: i64,
        approver_id: &str,
    ) -> Result<Option<OnboardingRequest>> {
        self.reject_onboarding_impl(request_id, approver_id).await
    }

    // 表单模块
    async fn create_form(&self, form: CreateFormRequest) -> Result<Form> {
        self.create_form_impl(form).await
    }

    async fn create_form_if_missing(&self, form: CreateFormRequest) -> Result<bool> {
        self.create_form_if_missing_impl(form).await
    }

    async fn get_form_by_id(&self, id: &str) -> Result<Option<Form>> {
        self.get_form_by_id_impl(id).await
    }

    async fn list_forms(&self) -> Result<Vec<Form>> {
        self.list_forms_impl().await
    }

    async fn update_form(&self, id: &str, update: UpdateFormRequest) -> Result<Option<Form>> {
        self.update_form_impl(id, update).await
    }

    async fn delete_form(&self, id: &str) -> Result<bool> {
        self.delete_form_impl(id).await
    }

    // 评估任务模块
    async fn upsert_assignment(&self, assignment: Assignment) -> Result<(Assignment, bool)> {
        self.upsert_assignment_impl(assignment).await
    }

    async fn upsert_assignments(&self, assignments: Vec<Assignment>) -> Result<usize> {
        self.upsert_assignments_impl(assignments).await
    }

    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn list_assignments_for_employee(&self, employee_id: &str) -> Result<Vec<Assignment>> {
        self.list_assignments_for_employee_impl(employee_id).await
    }

    // 问卷回复模块
    async fn create_response(
        &self,
        assignment_id: &str,
        responder_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<FormResponse> {
        self.create_response_impl(assignment_id, responder_id, answers)
            .await
    }

    async fn get_response_by_assignment_and_responder(
        &self,
        assignment_id: &str,
        responder_id: &str,
    ) -> Result<Option<FormResponse>> {
        self.get_response_by_assignment_and_responder_impl(assignment_id, responder_id)
            .await
    }

    async fn list_responses_for_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<FormResponse>> {
        self.list_responses_for_assignment_impl(assignment_id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn assign_course(
        &self,
        employee_id: &str,
        course_id: i64,
    ) -> Result<(EmployeeCourse, bool)> {
        self.assign_course_impl(employee_id, course_id).await
    }

    async fn get_course_assignment_by_id(&self, id: i64) -> Result<Option<EmployeeCourse>> {
        self.get_course_assignment_by_id_impl(id).await
    }

    async fn update_course_assignment_status(
        &self,
        id: i64,
        status: EmployeeCourseStatus,
    ) -> Result<Option<EmployeeCourse>> {
        self.update_course_assignment_status_impl(id, status).await
    }

    async fn list_employee_courses(&self, employee_id: &str) -> Result<Vec<EmployeeCourseItem>> {
        self.list_employee_courses_impl(employee_id).await
    }
}
