//! 用户目录页状态

use user_directory_core::types::UserRecord;
use user_directory_core::{ListViewState, UserDirectory, ViewLoad};

/// 目录页内的键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFocus {
    /// 搜索框
    #[default]
    Search,
    /// 用户表格
    Table,
}

/// 用户目录页状态
#[derive(Debug, Default)]
pub struct DirectoryState {
    /// 加载状态（就绪后持有固定的用户集合）
    pub load: ViewLoad<UserDirectory>,
    /// 列表视图状态机
    pub view: ListViewState,
    /// 键盘焦点
    pub focus: DirectoryFocus,
    /// 当前页内选中的行
    pub selected: usize,
    /// 建议下拉框中高亮的条目
    pub suggestion_cursor: Option<usize>,
}

impl DirectoryState {
    /// 挂载目录页：全新的视图状态，进入 Loading
    pub fn new() -> Self {
        Self::default()
    }

    /// 已加载的用户集合
    pub fn directory(&self) -> Option<&UserDirectory> {
        self.load.ready()
    }

    /// 当前页的用户
    pub fn visible_page(&self) -> Vec<&UserRecord> {
        self.directory()
            .map(|dir| dir.visible_page(&self.view))
            .unwrap_or_default()
    }

    /// 匹配当前输入的建议
    pub fn suggestions(&self) -> Vec<&UserRecord> {
        self.directory()
            .map(|dir| dir.suggestions(&self.view))
            .unwrap_or_default()
    }

    /// 建议下拉框是否展开
    pub fn dropdown_open(&self) -> bool {
        self.focus == DirectoryFocus::Search
            && self.directory().is_some()
            && UserDirectory::shows_suggestions(&self.view)
    }

    /// 当前选中的用户
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.visible_page().get(self.selected).copied()
    }

    /// 视图状态变化后，把行光标夹回当前页范围内
    pub fn clamp_selection(&mut self) {
        let rows = self.visible_page().len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}
