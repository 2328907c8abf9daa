//! 后端命令与结果

use user_directory_core::types::UserRecord;
use user_directory_core::CoreResult;

/// 交给后端执行的请求
///
/// `ticket` 标识发起请求时的那次导航，结果回来时据此丢弃过期响应。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 获取全部用户
    LoadDirectory { ticket: u64 },
    /// 获取单个用户
    LoadUser { ticket: u64, user_id: String },
}

impl Command {
    pub fn ticket(&self) -> u64 {
        match self {
            Self::LoadDirectory { ticket } | Self::LoadUser { ticket, .. } => *ticket,
        }
    }
}

/// 后端请求结果
#[derive(Debug)]
pub enum BackendMessage {
    DirectoryLoaded {
        ticket: u64,
        result: CoreResult<Vec<UserRecord>>,
    },
    UserLoaded {
        ticket: u64,
        result: CoreResult<UserRecord>,
    },
}

impl BackendMessage {
    pub fn ticket(&self) -> u64 {
        match self {
            Self::DirectoryLoaded { ticket, .. } | Self::UserLoaded { ticket, .. } => *ticket,
        }
    }
}
