//! 用户详情页消息

/// 用户详情页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMessage {
    /// 返回用户列表
    BackToUsers,
}
