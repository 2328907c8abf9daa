//! Generic HTTP client tools
//!
//! Shared request flow for every user source: attach the cache-bypass
//! headers, send, log, read the body. Status interpretation is left to the
//! caller because the collection and detail endpoints classify failures
//! differently.

use reqwest::RequestBuilder;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// Maximum number of characters of a body that may reach a log line.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Marks a request as uncacheable end to end.
    pub fn no_store(request_builder: RequestBuilder) -> RequestBuilder {
        request_builder
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
    }

    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP answer, success or not
    /// * `Err(ProviderError::Timeout | ProviderError::NetworkError)` when no answer arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 2xx
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Truncate a body for safe logging.
///
/// Cuts on a character boundary after `LOG_BODY_LIMIT` characters and appends
/// the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_BODY_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(304));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("[]"), "[]");
    }

    #[test]
    fn body_at_limit_unchanged() {
        let s = "a".repeat(LOG_BODY_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_on_char_boundary() {
        let s = "用".repeat(LOG_BODY_LIMIT + 10);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"用".repeat(LOG_BODY_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", s.len())));
    }

    #[test]
    fn parse_json_valid() {
        let result: Result<Vec<u32>, ProviderError> = HttpUtils::parse_json("[1,2,3]", "test");
        assert!(
            matches!(&result, Ok(v) if v == &[1, 2, 3]),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Vec<u32>, ProviderError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { provider, .. }) if provider == "test"),
            "unexpected parse result: {result:?}"
        );
    }
}
