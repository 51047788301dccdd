// Application services; handlers stay thin and policy gates are consulted
// before any state is mutated

pub mod auth;
pub mod department;
pub mod employee;
pub mod leave;
pub mod salary;

pub use auth::AuthService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use leave::LeaveService;
pub use salary::SalaryService;
