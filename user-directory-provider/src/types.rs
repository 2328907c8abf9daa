//! 用户目录数据类型

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default remote directory.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A user as returned by the directory endpoints.
///
/// The collection endpoint may omit the detail-only fields (`website`,
/// `address`, `company.catchPhrase`, `company.bs`); they default to empty
/// strings so both payloads share one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

/// 地址
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// 经纬度（远端以字符串返回）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// 公司
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Connection settings for a [`UserSource`](crate::UserSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL without the `/users` suffix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Config pointing at `base_url` with the default timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Base URL with trailing slashes removed.
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_USER: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    }"#;

    #[test]
    fn parses_full_record() {
        let user: UserRecord = serde_json::from_str(FULL_USER).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn detail_fields_default_when_absent() {
        let json = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz",
            "phone": "210.067.6132",
            "company": { "name": "Johns Group" }
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.company.name, "Johns Group");
        assert!(user.company.bs.is_empty());
        assert!(user.website.is_empty());
        assert_eq!(user.address, Address::default());
    }

    #[test]
    fn missing_identity_fields_fail() {
        // JSONPlaceholder answers an unknown id with `{}`
        assert!(serde_json::from_str::<UserRecord>("{}").is_err());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = ProviderConfig::with_base_url("http://localhost:3000//");
        assert_eq!(config.normalized_base_url(), "http://localhost:3000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
