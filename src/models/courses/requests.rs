use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CourseStatus, CourseType, EmployeeCourseStatus};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: Option<String>,
    pub course_type: CourseType,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_type: Option<CourseType>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub course_type: Option<CourseType>,
    pub status: Option<CourseStatus>,
}

// 课程分配（(employee_id, course_id) 上 upsert）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct AssignCourseRequest {
    pub employee_id: String,
    pub course_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseAssignmentRequest {
    pub status: EmployeeCourseStatus,
}
