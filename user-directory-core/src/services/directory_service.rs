//! 用户目录服务
//!
//! 包装 [`UserSource`]，把数据源错误归并为两类用户可见的结果：
//! 目录加载失败 (`FetchFailed`) 与用户不存在 (`UserNotFound`)。

use std::sync::Arc;

use user_directory_provider::{ProviderError, UserRecord, UserSource};

use crate::error::{CoreError, CoreResult};

/// 用户目录服务
#[derive(Clone)]
pub struct DirectoryService {
    source: Arc<dyn UserSource>,
}

impl DirectoryService {
    /// 创建服务实例
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    /// 加载目录（每次挂载目录视图调用一次）
    pub async fn load_directory(&self) -> CoreResult<Vec<UserRecord>> {
        match self.source.fetch_users().await {
            Ok(users) => {
                log::info!("Loaded {} users from {}", users.len(), self.source.id());
                Ok(users)
            }
            Err(e) => Err(Self::report(CoreError::FetchFailed(e))),
        }
    }

    /// 加载单个用户（每次挂载详情视图调用一次）
    pub async fn load_user(&self, user_id: &str) -> CoreResult<UserRecord> {
        match self.source.fetch_user(user_id).await {
            Ok(user) => Ok(user),
            Err(ProviderError::UserNotFound { user_id, .. }) => {
                Err(Self::report(CoreError::UserNotFound(user_id)))
            }
            Err(e) => Err(Self::report(CoreError::FetchFailed(e))),
        }
    }

    fn report(error: CoreError) -> CoreError {
        if error.is_expected() {
            log::warn!("{error}");
        } else {
            log::error!("{error}");
        }
        error
    }
}
