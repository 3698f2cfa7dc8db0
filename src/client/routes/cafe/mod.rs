pub mod form;
pub mod list;

pub use form::{CafeCreate, CafeEdit};
pub use list::CafeList;
