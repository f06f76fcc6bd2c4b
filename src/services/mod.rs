pub mod assignments;
pub mod auth;
pub mod courses;
pub mod employees;
pub mod files;
pub mod forms;
pub mod hierarchy;
pub mod onboarding;
pub mod relations;
pub mod responses;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use employees::EmployeeService;
pub use files::FileService;
pub use forms::FormService;
pub use hierarchy::HierarchyService;
pub use onboarding::OnboardingService;
pub use relations::RelationService;
pub use responses::ResponseService;
