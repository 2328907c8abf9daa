use serde::{Deserialize, Serialize};

/// Unified error type for all user directory requests.
///
/// Each variant includes a `provider` field identifying which source produced
/// the error. All variants are serializable for structured error reporting.
///
/// None of the variants are retried: a failed request is terminal for the
/// view that issued it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The collection endpoint answered with a non-success status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body (truncated), if any.
        raw_message: Option<String>,
    },

    /// The detail endpoint reported the user as absent.
    ///
    /// Any non-success status on the per-user endpoint lands here, as does an
    /// identifier that cannot form a single path segment.
    UserNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Identifier that was requested.
        user_id: String,
        /// HTTP status code, `None` when no request was sent.
        status: Option<u16>,
    },

    /// Failed to parse the response body.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// Provider that produced the error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::UserNotFound { provider, .. }
            | Self::ParseError { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider, status, ..
            } => {
                write!(f, "[{provider}] Request failed with HTTP {status}")
            }
            Self::UserNotFound {
                provider,
                user_id,
                status,
            } => match status {
                Some(code) => write!(f, "[{provider}] User '{user_id}' not found (HTTP {code})"),
                None => write!(f, "[{provider}] User '{user_id}' not found"),
            },
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
