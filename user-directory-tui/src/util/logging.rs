//! 日志初始化
//!
//! 日志写入 `<data_local_dir>/user-directory/user-directory.log`，
//! 级别由 `RUST_LOG` 控制，默认 info。库中的 `log` 记录同样会被收集。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "user-directory.log";

/// `RUST_LOG` 未设置或无法解析时使用
const DEFAULT_DIRECTIVES: &str = "info";

/// 日志目录
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-directory")
}

/// 由 `RUST_LOG` 风格的指令构建过滤器，缺省或解析失败时回退到 info
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// 安装全局 subscriber
pub fn init_logging() -> Result<()> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("User Directory TUI starting, logging to {}", path.display());
    Ok(())
}
