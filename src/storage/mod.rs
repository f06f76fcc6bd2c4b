use std::collections::BTreeMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 员工管理方法
    // 创建员工
    async fn create_employee(&self, employee: CreateEmployeeRequest) -> Result<Employee>;
    // 通过ID获取员工信息
    async fn get_employee_by_id(&self, id: &str) -> Result<Option<Employee>>;
    // 通过邮箱获取员工信息
    async fn get_employee_by_email(&self, email: &str) -> Result<Option<Employee>>;
    // 分页列出员工
    async fn list_employees_with_pagination(
        &self,
        query: EmployeeListQuery,
    ) -> Result<EmployeeListResponse>;
    // 列出全量员工（分配引擎与组织图使用）
    async fn list_all_employees(&self) -> Result<Vec<Employee>>;
    // 更新员工信息
    async fn update_employee(
        &self,
        id: &str,
        update: UpdateEmployeeRequest,
    ) -> Result<Option<Employee>>;
    // 删除员工，并在同一事务内级联删除其关系边、评估任务与课程记录
    async fn delete_employee(&self, id: &str) -> Result<bool>;
    // 更新员工头像地址
    async fn update_employee_profile_picture(&self, id: &str, url: &str) -> Result<bool>;

    /// 关系图管理方法
    // 幂等写入关系边，返回边与是否新建
    async fn upsert_relation(
        &self,
        relation: UpsertRelationRequest,
    ) -> Result<(EmployeeRelation, bool)>;
    // 通过ID获取关系边
    async fn get_relation_by_id(&self, id: i64) -> Result<Option<EmployeeRelation>>;
    // 列出全量关系边（分配引擎与组织图使用）
    async fn list_relations(&self) -> Result<Vec<EmployeeRelation>>;
    // 列出关系边并联出两端员工
    async fn list_relations_with_employees(&self) -> Result<Vec<RelationWithEmployees>>;
    // 修改关系边类型
    async fn update_relation(
        &self,
        id: i64,
        update: UpdateRelationRequest,
    ) -> Result<Option<EmployeeRelation>>;
    // 删除关系边
    async fn delete_relation(&self, id: i64) -> Result<bool>;

    /// 入职流程方法
    // 提交入职申请
    async fn create_onboarding_request(
        &self,
        user_id: &str,
        auth_role: &str,
        request: SubmitOnboardingRequest,
        profile_picture_url: Option<String>,
    ) -> Result<OnboardingRequest>;
    // 通过ID获取入职申请
    async fn get_onboarding_request_by_id(&self, id: i64) -> Result<Option<OnboardingRequest>>;
    // 获取某用户最近一次入职申请
    async fn get_onboarding_request_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<OnboardingRequest>>;
    // 分页列出入职申请
    async fn list_onboarding_requests_with_pagination(
        &self,
        query: OnboardingListQuery,
    ) -> Result<OnboardingListResponse>;
    // 批准入职申请：同一事务内落库员工、上级边与 Lead 扇出边
    async fn approve_onboarding(
        &self,
        request_id: i64,
        approver_id: &str,
        manager_id: Option<String>,
        lead_report_ids: Vec<String>,
    ) -> Result<Option<Employee>>;
    // 驳回入职申请
    async fn reject_onboarding(
        &self,
        request_id: i64,
        approver_id: &str,
    ) -> Result<Option<OnboardingRequest>>;

    /// 表单管理方法
    // 创建表单
    async fn create_form(&self, form: CreateFormRequest) -> Result<Form>;
    // 表单不存在时创建（启动时内置表单播种使用），返回是否新建
    async fn create_form_if_missing(&self, form: CreateFormRequest) -> Result<bool>;
    // 通过ID获取表单
    async fn get_form_by_id(&self, id: &str) -> Result<Option<Form>>;
    // 列出全部表单
    async fn list_forms(&self) -> Result<Vec<Form>>;
    // 更新表单（整体替换问题列表）
    async fn update_form(&self, id: &str, update: UpdateFormRequest) -> Result<Option<Form>>;
    // 删除表单
    async fn delete_form(&self, id: &str) -> Result<bool>;

    /// 评估任务方法
    // 幂等写入单个评估任务，已存在时仅刷新 assigned_at
    async fn upsert_assignment(&self, assignment: Assignment) -> Result<(Assignment, bool)>;
    // 同一事务内幂等写入一批评估任务（自动分配引擎使用）
    async fn upsert_assignments(&self, assignments: Vec<Assignment>) -> Result<usize>;
    // 通过ID获取评估任务
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;
    // 分页列出评估任务
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 列出某员工的全部评估任务
    async fn list_assignments_for_employee(&self, employee_id: &str) -> Result<Vec<Assignment>>;

    /// 问卷回复方法
    // 写入一条不可变回复
    async fn create_response(
        &self,
        assignment_id: &str,
        responder_id: &str,
        answers: BTreeMap<String, String>,
    ) -> Result<FormResponse>;
    // 查询某人对某任务的回复
    async fn get_response_by_assignment_and_responder(
        &self,
        assignment_id: &str,
        responder_id: &str,
    ) -> Result<Option<FormResponse>>;
    // 列出某任务下的全部回复
    async fn list_responses_for_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<Vec<FormResponse>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 分页列出课程
    async fn list_courses_with_pagination(&self, query: CourseListQuery)
    -> Result<CourseListResponse>;
    // 更新课程
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程，并在同一事务内级联删除课程分配记录
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 幂等分配课程给员工，返回记录与是否新建
    async fn assign_course(
        &self,
        employee_id: &str,
        course_id: i64,
    ) -> Result<(EmployeeCourse, bool)>;
    // 通过ID获取课程分配记录
    async fn get_course_assignment_by_id(&self, id: i64) -> Result<Option<EmployeeCourse>>;
    // 更新课程分配状态（completed 时写入 completed_at）
    async fn update_course_assignment_status(
        &self,
        id: i64,
        status: EmployeeCourseStatus,
    ) -> Result<Option<EmployeeCourse>>;
    // 列出某员工的课程及状态
    async fn list_employee_courses(&self, employee_id: &str) -> Result<Vec<EmployeeCourseItem>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
