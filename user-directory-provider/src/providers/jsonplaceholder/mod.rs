//! JSONPlaceholder user source
//!
//! Any REST service exposing `GET /users` and `GET /users/{id}` with the
//! JSONPlaceholder schema works with this provider.

mod http;
mod provider;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::traits::ProviderErrorMapper;
use crate::types::ProviderConfig;

const PROVIDER_NAME: &str = "jsonplaceholder";

/// JSONPlaceholder 用户数据源
pub struct JsonPlaceholderProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl JsonPlaceholderProvider {
    /// 按配置创建数据源
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    /// 集合端点
    pub(crate) fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// 单用户端点
    pub(crate) fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}", self.base_url)
    }
}

impl ProviderErrorMapper for JsonPlaceholderProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

/// 用户 ID 必须能作为单个 URL 路径段
pub(crate) fn is_valid_user_id(user_id: &str) -> bool {
    !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
        && user_id != "."
        && user_id != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slash() {
        let provider =
            JsonPlaceholderProvider::new(&ProviderConfig::with_base_url("http://127.0.0.1:9/"))
                .unwrap();
        assert_eq!(provider.users_url(), "http://127.0.0.1:9/users");
        assert_eq!(provider.user_url("3"), "http://127.0.0.1:9/users/3");
    }

    #[test]
    fn user_id_validation() {
        assert!(is_valid_user_id("1"));
        assert!(is_valid_user_id("abc-1"));
        assert!(!is_valid_user_id(""));
        assert!(!is_valid_user_id(".."));
        assert!(!is_valid_user_id("1/2"));
        assert!(!is_valid_user_id("1?x=2"));
        assert!(!is_valid_user_id("张三"));
    }
}
