use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Employee;
use crate::models::PaginationInfo;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/employee.ts")]
pub struct EmployeeListResponse {
    pub items: Vec<Employee>,
    pub pagination: PaginationInfo,
}
