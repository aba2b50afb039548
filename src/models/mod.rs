pub mod employee;
pub mod employee_type;
pub mod employment_status;
pub mod gender;
pub mod lookup;

pub use employee::{Employee, EmployeeFields};
pub use employee_type::EmployeeType;
pub use employment_status::EmploymentStatus;
pub use gender::Gender;
pub use lookup::Lookup;
