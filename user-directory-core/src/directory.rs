//! 用户列表视图状态机
//!
//! 列表视图只有四个可变字段（见 [`ListViewState`]），其余一切
//! （建议列表、当前页内容、总页数）都由 [`UserDirectory`] 从
//! 状态与固定的用户集合中确定性地推导出来。
//!
//! 状态转换都是纯函数：接收旧状态，返回新状态，不做任何 I/O。
//!
//! ```text
//! 输入文字  ──▶ on_query_change     (query, 显示建议)
//! 回车提交  ──▶ on_submit           (submitted_filter = query, 回到第 1 页)
//! 选择建议  ──▶ on_suggestion_pick  (query = email, 隐藏建议，不提交)
//! 翻页      ──▶ on_page_change      (clamp 到 [1, total_pages])
//! ```
//!
//! ```
//! use user_directory_core::{ListViewState, UserDirectory};
//! use user_directory_provider::UserRecord;
//!
//! let users = (1..=7)
//!     .map(|id| UserRecord {
//!         id,
//!         name: format!("User {id}"),
//!         ..UserRecord::default()
//!     })
//!     .collect();
//! let dir = UserDirectory::with_default_page_size(users);
//!
//! let state = ListViewState::new();
//! assert_eq!(dir.total_pages(&state), 2);
//!
//! let state = dir.on_page_change(&state, 1);
//! let ids: Vec<u64> = dir.visible_page(&state).iter().map(|u| u.id).collect();
//! assert_eq!(ids, [6, 7]);
//!
//! // 最后一页再往后翻不变
//! assert_eq!(dir.on_page_change(&state, 1), state);
//! ```

use serde::{Deserialize, Serialize};
use user_directory_provider::UserRecord;

/// 每页默认条数
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 列表视图状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewState {
    /// 输入框中的文字
    pub query: String,
    /// 已提交、实际作用于列表的过滤文字
    pub submitted_filter: String,
    /// 当前页（从 1 开始）
    pub current_page: usize,
    /// 建议下拉框是否可见
    pub suggestions_visible: bool,
}

impl ListViewState {
    /// 视图挂载时的初始状态
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            submitted_filter: String::new(),
            current_page: 1,
            suggestions_visible: false,
        }
    }
}

/// Case-insensitive substring match of `text` against name or email.
///
/// Empty `text` matches every record.
pub fn matches(record: &UserRecord, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.email.to_lowercase().contains(&needle)
}

/// 固定的用户集合 + 每页条数
///
/// 由一次成功的目录加载创建，之后在视图生命周期内不再变化。
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
    page_size: usize,
}

impl UserDirectory {
    /// `page_size` 小于 1 时按 1 处理
    pub fn new(users: Vec<UserRecord>, page_size: usize) -> Self {
        Self {
            users,
            page_size: page_size.max(1),
        }
    }

    /// 使用默认每页条数
    pub fn with_default_page_size(users: Vec<UserRecord>) -> Self {
        Self::new(users, DEFAULT_PAGE_SIZE)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ========== 状态转换 ==========

    /// 输入文字变化：更新 query 并显示建议
    #[must_use]
    pub fn on_query_change(&self, state: &ListViewState, new_query: impl Into<String>) -> ListViewState {
        self.settle(ListViewState {
            query: new_query.into(),
            suggestions_visible: true,
            ..state.clone()
        })
    }

    /// 提交搜索：唯一会改变 `submitted_filter` 的地方
    #[must_use]
    pub fn on_submit(&self, state: &ListViewState) -> ListViewState {
        self.settle(ListViewState {
            submitted_filter: state.query.clone(),
            current_page: 1,
            suggestions_visible: false,
            ..state.clone()
        })
    }

    /// 选择一条建议：只回填邮箱并收起下拉框
    ///
    /// 不提交过滤条件，也不重置页码。
    #[must_use]
    pub fn on_suggestion_pick(&self, state: &ListViewState, user: &UserRecord) -> ListViewState {
        self.settle(ListViewState {
            query: user.email.clone(),
            suggestions_visible: false,
            ..state.clone()
        })
    }

    /// 翻页：结果被夹在 `[1, total_pages]` 之间
    #[must_use]
    pub fn on_page_change(&self, state: &ListViewState, delta: isize) -> ListViewState {
        self.settle(ListViewState {
            current_page: state.current_page.saturating_add_signed(delta),
            ..state.clone()
        })
    }

    /// 建立页码不变式
    fn settle(&self, mut state: ListViewState) -> ListViewState {
        state.current_page = state.current_page.clamp(1, self.total_pages(&state));
        state
    }

    // ========== 派生数据 ==========

    /// 按 `text` 过滤后的用户（保持原有顺序）
    pub fn filtered(&self, text: &str) -> Vec<&UserRecord> {
        self.users.iter().filter(|user| matches(user, text)).collect()
    }

    /// 匹配当前输入的建议
    pub fn suggestions(&self, state: &ListViewState) -> Vec<&UserRecord> {
        self.filtered(&state.query)
    }

    /// 建议下拉框此刻是否应当展示
    pub fn shows_suggestions(state: &ListViewState) -> bool {
        state.suggestions_visible && !state.query.is_empty()
    }

    /// 已提交过滤条件下的记录数
    pub fn filtered_count(&self, state: &ListViewState) -> usize {
        self.users
            .iter()
            .filter(|user| matches(user, &state.submitted_filter))
            .count()
    }

    /// 总页数，至少为 1（没有匹配时是一张空页）
    pub fn total_pages(&self, state: &ListViewState) -> usize {
        self.filtered_count(state).div_ceil(self.page_size).max(1)
    }

    /// 当前页内容，最多 `page_size` 条
    pub fn visible_page(&self, state: &ListViewState) -> Vec<&UserRecord> {
        let page = state.current_page.clamp(1, self.total_pages(state));
        self.users
            .iter()
            .filter(|user| matches(user, &state.submitted_filter))
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// “上一页”是否可用
    pub fn can_go_previous(&self, state: &ListViewState) -> bool {
        state.current_page > 1
    }

    /// “下一页”是否可用
    pub fn can_go_next(&self, state: &ListViewState) -> bool {
        state.current_page < self.total_pages(state)
    }

    /// 当前页覆盖的区间 `(first, last, total)`，从 1 开始；没有匹配时为 None
    pub fn page_range(&self, state: &ListViewState) -> Option<(usize, usize, usize)> {
        let total = self.filtered_count(state);
        if total == 0 {
            return None;
        }
        let page = state.current_page.clamp(1, self.total_pages(state));
        let first = (page - 1) * self.page_size + 1;
        let last = (first + self.page_size - 1).min(total);
        Some((first, last, total))
    }
}
