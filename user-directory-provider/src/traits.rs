use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::UserRecord;

/// 错误上下文信息（内部使用）
/// 用于在映射状态码时区分集合请求与单用户请求
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求的用户 ID（单用户请求时为 Some）
    pub user_id: Option<String>,
}

impl ErrorContext {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将非成功状态码映射到统一错误类型
    ///
    /// 单用户请求的任何非成功状态都视为“用户不存在”，
    /// 集合请求则返回 `HttpStatus`。
    fn map_status(&self, status: u16, body: String, context: ErrorContext) -> ProviderError {
        match context.user_id {
            Some(user_id) => ProviderError::UserNotFound {
                provider: self.provider_name().to_string(),
                user_id,
                status: Some(status),
            },
            None => ProviderError::HttpStatus {
                provider: self.provider_name().to_string(),
                status,
                raw_message: (!body.is_empty()).then_some(body),
            },
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// 用户数据源 Trait
#[async_trait]
pub trait UserSource: Send + Sync {
    /// 数据源标识符
    fn id(&self) -> &'static str;

    /// 获取全部用户（绕过缓存，不重试）
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;

    /// 按 ID 获取单个用户
    ///
    /// 非成功状态返回 [`ProviderError::UserNotFound`]
    async fn fetch_user(&self, user_id: &str) -> Result<UserRecord>;
}
