//! User Directory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 数据获取与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     LocalConfigService      // 读取配置文件
//!     CoreService::new()      // 创建 tokio 运行时与数据源
//!     init_terminal()         // 初始化终端
//!     App::new() + navigate   // 挂载初始路由，发出第一次请求
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 初始路由可以作为第一个参数传入，例如：
//!
//!     user-directory /users/3

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use user_directory_core::{Navigator, Route};

use backend::{ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    init_logging()?;

    // 2. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    config.apply_preferences();

    // 3. 初始路由
    let route = match std::env::args().nth(1) {
        Some(path) => Route::from_path(&path).with_context(|| format!("Unknown route: {path}"))?,
        None => Route::default(),
    };

    // 4. 后端服务
    let backend = CoreService::new(&config)?;

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例并挂载初始路由
    let mut app = model::App::new(config, Box::new(config_service));
    app.navigate(route);

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend);

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 9. 返回结果
    result
}
