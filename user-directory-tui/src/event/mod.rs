//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入翻译为 Message。
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发
//!
//!     handle_key_event 判断顺序：
//!         - 有弹窗打开时，只处理关闭
//!         - 全局快捷键（Ctrl+C、Alt 组合键）
//!         - 当前路由为详情页：handle_detail_keys
//!         - 目录页且焦点在搜索框：handle_search_keys（字符都是输入）
//!         - 目录页且焦点在表格：handle_table_keys

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
