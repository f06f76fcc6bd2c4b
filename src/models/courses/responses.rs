use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Course, EmployeeCourse};
use crate::models::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseAssignmentResponse {
    pub assignment: EmployeeCourse,
}

// 员工视角：课程 + 自己的进度行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct EmployeeCourseItem {
    pub course: Course,
    pub assignment: EmployeeCourse,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct EmployeeCourseListResponse {
    pub items: Vec<EmployeeCourseItem>,
}
