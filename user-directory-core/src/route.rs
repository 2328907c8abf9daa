//! 路由
//!
//! 两条路由：目录 `/` 与用户详情 `/users/{id}`。
//! 行点击等跳转通过 [`Navigator::navigate`] 显式传递目标路由。

use std::fmt;

/// 路由
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// 用户目录
    #[default]
    Directory,
    /// 用户详情，ID 为字符串路径段
    UserDetail { user_id: String },
}

impl Route {
    /// 用户详情路由
    pub fn user(user_id: impl Into<String>) -> Self {
        Self::UserDetail {
            user_id: user_id.into(),
        }
    }

    /// 路由路径
    pub fn path(&self) -> String {
        match self {
            Self::Directory => "/".to_string(),
            Self::UserDetail { user_id } => format!("/users/{user_id}"),
        }
    }

    /// 从路径解析路由，无法识别时返回 None
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Self::Directory);
        }
        let user_id = trimmed.strip_prefix("/users/")?;
        if user_id.is_empty() || user_id.contains('/') {
            return None;
        }
        Some(Self::user(user_id))
    }

    /// 是否为详情页
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::UserDetail { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// 显式导航接口
///
/// 由宿主前端实现：切换到目标视图并触发该视图的一次加载。
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}
