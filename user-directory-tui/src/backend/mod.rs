//!
//! src/backend/mod.rs
//! Backend 层：数据获取与配置
//!
//! Backend 层与 UI 完全解耦，UI 只通过命令和结果消息与它交互。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!         mod core_service;       // 核心服务入口，持有 tokio 运行时
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App::navigate(route)
//!         ↓
//!     挂载视图（Loading），登记 Command
//!         ↓
//!     主循环 take_commands() → CoreService::dispatch()
//!         ↓
//!     tokio 任务调用 user-directory-core 的 DirectoryService
//!         ↓
//!     结果经 mpsc 通道送回，主循环 try_recv()
//!         ↓
//!     Update 层处理 AppMessage::Backend，视图进入终态
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
