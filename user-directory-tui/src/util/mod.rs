//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务无关的代码：终端的初始化和恢复、日志文件。
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显：按键不会显示在终端上
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · 日志
//!         - 终端被 UI 占用，所有日志写入数据目录下的文件
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
