//! 弹窗与表单状态

mod form;
mod modal;
pub mod palette;

pub use form::{config_field, FormKind, FormState};
pub use modal::{Modal, ModalState};
