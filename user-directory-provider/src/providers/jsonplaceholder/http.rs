//! JSONPlaceholder HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper};

use super::JsonPlaceholderProvider;

impl JsonPlaceholderProvider {
    /// 执行 GET 请求（绕过缓存）
    ///
    /// 非成功状态码按 `context` 映射为统一错误
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let request = HttpUtils::no_store(self.client.get(url));
        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", url).await?;

        if !is_success(status) {
            return Err(self.map_status(status, body, context));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}
