//! 各页面状态

mod detail;
mod directory;
mod modal;

pub use detail::DetailState;
pub use directory::{DirectoryFocus, DirectoryState};
pub use modal::{Modal, ModalState};
