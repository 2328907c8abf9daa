//! 核心服务
//!
//! 持有 tokio 运行时与 user-directory-core 的 `DirectoryService`。
//! 请求在运行时上异步执行，结果经通道送回同步的 UI 主循环。

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use user_directory_core::DirectoryService;
use user_directory_provider::create_source;

use super::AppConfig;
use crate::message::{BackendMessage, Command};

/// TUI 核心服务
pub struct CoreService {
    runtime: Runtime,
    directory: DirectoryService,
    sender: Sender<BackendMessage>,
    receiver: Receiver<BackendMessage>,
}

impl CoreService {
    /// 根据配置创建数据源与运行时
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source = create_source(&config.provider_config())
            .context("Failed to create user source")?;
        let runtime = Runtime::new().context("Failed to start async runtime")?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            directory: DirectoryService::new(source),
            sender,
            receiver,
        })
    }

    /// 在后台执行命令
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching request #{}: {command:?}", command.ticket());

        let directory = self.directory.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            let message = match command {
                Command::LoadDirectory { ticket } => BackendMessage::DirectoryLoaded {
                    ticket,
                    result: directory.load_directory().await,
                },
                Command::LoadUser { ticket, user_id } => BackendMessage::UserLoaded {
                    ticket,
                    result: directory.load_user(&user_id).await,
                },
            };

            if sender.send(message).is_err() {
                log::debug!("UI loop is gone, dropping result");
            }
        });
    }

    /// 取出一条已完成的结果（不阻塞）
    pub fn try_recv(&self) -> Option<BackendMessage> {
        self.receiver.try_recv().ok()
    }
}
