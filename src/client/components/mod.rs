pub mod confirm_dialog;
pub mod error_alert;
pub mod navbar;
pub mod page;
pub mod pagination;
pub mod text_field;

pub use confirm_dialog::ConfirmDialog;
pub use error_alert::ErrorAlert;
pub use navbar::Navbar;
pub use page::{Page, PageLayout};
pub use pagination::Pagination;
pub use text_field::TextField;
