pub mod form;
pub mod list;

pub use form::{EmployeeCreate, EmployeeEdit};
pub use list::EmployeeList;
