use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseType {
    Course,
    Webinar,
    Certification,
    Workshop,
}

impl<'de> Deserialize<'de> for CourseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid course type: '{s}'. Supported types: course, webinar, certification, workshop"
            ))
        })
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CourseType::Course => "course",
            CourseType::Webinar => "webinar",
            CourseType::Certification => "certification",
            CourseType::Workshop => "workshop",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" => Ok(CourseType::Course),
            "webinar" => Ok(CourseType::Webinar),
            "certification" => Ok(CourseType::Certification),
            "workshop" => Ok(CourseType::Workshop),
            _ => Err(format!("Invalid course type: {s}")),
        }
    }
}

// 课程状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseStatus {
    Active,
    Inactive,
    Archived,
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid course status: '{s}'. Supported statuses: active, inactive, archived"
            ))
        })
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CourseStatus::Active => "active",
            CourseStatus::Inactive => "inactive",
            CourseStatus::Archived => "archived",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(CourseStatus::Active),
            "inactive" => Ok(CourseStatus::Inactive),
            "archived" => Ok(CourseStatus::Archived),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

// 员工课程状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum EmployeeCourseStatus {
    Assigned,
    InProgress,
    Completed,
    Overdue,
}

impl<'de> Deserialize<'de> for EmployeeCourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid employee course status: '{s}'. Supported statuses: assigned, in_progress, completed, overdue"
            ))
        })
    }
}

impl std::fmt::Display for EmployeeCourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EmployeeCourseStatus::Assigned => "assigned",
            EmployeeCourseStatus::InProgress => "in_progress",
            EmployeeCourseStatus::Completed => "completed",
            EmployeeCourseStatus::Overdue => "overdue",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EmployeeCourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(EmployeeCourseStatus::Assigned),
            "in_progress" => Ok(EmployeeCourseStatus::InProgress),
            "completed" => Ok(EmployeeCourseStatus::Completed),
            "overdue" => Ok(EmployeeCourseStatus::Overdue),
            _ => Err(format!("Invalid employee course status: {s}")),
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub course_type: CourseType,
    pub status: CourseStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 员工 x 课程 关联行（(employee_id, course_id) 唯一，重复分配走 upsert）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct EmployeeCourse {
    pub id: i64,
    pub employee_id: String,
    pub course_id: i64,
    pub status: EmployeeCourseStatus,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}
