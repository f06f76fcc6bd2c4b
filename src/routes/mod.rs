pub mod assignments;

pub mod auth;

pub mod courses;

pub mod employees;

pub mod files;

pub mod forms;

pub mod onboarding;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use employees::configure_employee_routes;
pub use files::configure_file_routes;
pub use forms::configure_form_routes;
pub use onboarding::configure_onboarding_routes;
