//! 视图加载状态

use crate::error::{CoreError, CoreResult};

/// 一次视图加载的结果
///
/// `Loading` 之后只会进入三种终态之一，失败不会重试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLoad<T> {
    /// 请求进行中
    Loading,
    /// 加载完成
    Ready(T),
    /// 资源不存在（携带请求的 ID）
    NotFound(String),
    /// 获取失败（携带错误描述）
    Failed(String),
}

impl<T> Default for ViewLoad<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewLoad<T> {
    /// 将服务层结果映射为终态
    pub fn from_result(result: CoreResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(CoreError::UserNotFound(id)) => Self::NotFound(id),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
