//!
//! src/message/mod.rs
//! Message 层：事件消息
//!
//! Event 层把按键翻译成消息，Update 层消费消息并修改 Model。
//! 后端完成的请求同样以消息的形式回到 Update 层。
//!
//!     AppMessage
//!         ├── Directory(DirectoryMessage)   // 用户目录页
//!         ├── Detail(DetailMessage)         // 用户详情页
//!         ├── Backend(BackendMessage)       // 请求结果
//!         └── Quit / Refresh / ShowHelp ... // 全局
//!
//!     Command
//!         Update 层不直接发请求，只登记 Command，由主循环交给后端。

mod app;
mod backend;
mod detail;
mod directory;

pub use app::AppMessage;
pub use backend::{BackendMessage, Command};
pub use detail::DetailMessage;
pub use directory::DirectoryMessage;
