pub mod header;
pub mod modals;

pub use header::PageHeader;
pub use modals::{ConfirmModal, ErrorModal, Paginator, SuccessModal};
