//! 可复用组件

pub mod load_state;
pub mod modal;
pub mod pagination;
pub mod search;
pub mod statusbar;
