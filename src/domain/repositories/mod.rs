pub mod department_repository;
pub mod employee_repository;
pub mod leave_request_repository;
pub mod salary_repository;
pub mod user_repository;

pub use department_repository::DepartmentRepository;
pub use employee_repository::EmployeeRepository;
pub use leave_request_repository::LeaveRequestRepository;
pub use salary_repository::SalaryRepository;
pub use user_repository::UserRepository;
