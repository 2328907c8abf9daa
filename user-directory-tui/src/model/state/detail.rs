//! 用户详情页状态

use user_directory_core::{DetailView, ViewLoad};

/// 用户详情页状态
#[derive(Debug, Default)]
pub struct DetailState {
    /// 路由中的用户 ID
    pub user_id: String,
    /// 加载状态
    pub load: ViewLoad<DetailView>,
}

impl DetailState {
    /// 挂载详情页，进入 Loading
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            load: ViewLoad::Loading,
        }
    }
}
