//! 应用主消息

use super::{BackendMessage, DetailMessage, DirectoryMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 用户目录页消息
    Directory(DirectoryMessage),

    /// 用户详情页消息
    Detail(DetailMessage),

    /// 后端请求结果
    Backend(BackendMessage),

    /// 关闭弹窗
    CloseModal,

    /// 返回上一级
    GoBack,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换深色/浅色主题
    ToggleTheme,

    /// 切换界面语言
    ToggleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
