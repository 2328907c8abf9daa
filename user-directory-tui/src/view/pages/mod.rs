//! 页面

pub mod directory;
pub mod user_detail;
