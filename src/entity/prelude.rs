//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::employee_courses::{
    ActiveModel as EmployeeCourseActiveModel, Entity as EmployeeCourses,
    Model as EmployeeCourseModel,
};
pub use super::employee_relations::{
    ActiveModel as EmployeeRelationActiveModel, Entity as EmployeeRelations,
    Model as EmployeeRelationModel,
};
pub use super::employees::{
    ActiveModel as EmployeeActiveModel, Entity as Employees, Model as EmployeeModel,
};
pub use super::form_responses::{
    ActiveModel as FormResponseActiveModel, Entity as FormResponses, Model as FormResponseModel,
};
pub use super::forms::{ActiveModel as FormActiveModel, Entity as Forms, Model as FormModel};
pub use super::onboarding_requests::{
    ActiveModel as OnboardingRequestActiveModel, Entity as OnboardingRequests,
    Model as OnboardingRequestModel,
};
