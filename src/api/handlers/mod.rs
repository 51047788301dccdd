pub mod auth;
pub mod departments;
pub mod employees;
pub mod leave_requests;
pub mod salaries;
