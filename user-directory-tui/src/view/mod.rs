//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     layout.rs       标题栏 + 页面 + 状态栏，弹窗在最上层
//!     theme.rs        深色/浅色配色
//!     components/     状态栏、搜索框与建议、分页、弹窗
//!     pages/          用户目录页、用户详情页

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
