//! JSONPlaceholder 数据源端到端测试（本地一次性 HTTP 服务）

mod common;

use common::{SEVEN_USERS, USER_THREE, closed_port_url, serve_once, source_for};
use user_directory_provider::ProviderError;

#[tokio::test]
async fn fetch_users_parses_collection() {
    let server = serve_once("200 OK", SEVEN_USERS).await;
    let source = source_for(&server.base_url);

    let users = require_ok!(source.fetch_users().await);
    assert_eq!(users.len(), 7);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[6].company.name, "Johns Group");
}

#[tokio::test]
async fn fetch_users_bypasses_cache() {
    let server = serve_once("200 OK", "[]").await;
    let source = source_for(&server.base_url);

    let users = require_ok!(source.fetch_users().await);
    assert!(users.is_empty());

    let request = require_ok!(server.request.await);
    assert!(request.starts_with("get /users http/1.1"), "{request}");
    assert!(request.contains("cache-control: no-cache, no-store"), "{request}");
    assert!(request.contains("pragma: no-cache"), "{request}");
}

#[tokio::test]
async fn fetch_users_non_success_is_http_status() {
    let server = serve_once("500 Internal Server Error", r#"{"error":"down"}"#).await;
    let source = source_for(&server.base_url);

    let err = require_err!(source.fetch_users().await);
    assert!(
        matches!(err, ProviderError::HttpStatus { status: 500, .. }),
        "unexpected error: {err:?}"
    );
    assert!(!err.is_expected());
}

#[tokio::test]
async fn fetch_users_malformed_body_is_parse_error() {
    let server = serve_once("200 OK", r#"{"users":[]}"#).await;
    let source = source_for(&server.base_url);

    let err = require_err!(source.fetch_users().await);
    assert!(
        matches!(err, ProviderError::ParseError { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn fetch_user_parses_detail_fields() {
    let server = serve_once("200 OK", USER_THREE).await;
    let source = source_for(&server.base_url);

    let user = require_ok!(source.fetch_user("3").await);
    assert_eq!(user.id, 3);
    assert_eq!(user.website, "ramiro.info");
    assert_eq!(user.address.city, "McKenziehaven");
    assert_eq!(user.company.bs, "e-enable strategic applications");

    let request = require_ok!(server.request.await);
    assert!(request.starts_with("get /users/3 http/1.1"), "{request}");
}

#[tokio::test]
async fn fetch_absent_user_is_not_found() {
    let server = serve_once("404 Not Found", "{}").await;
    let source = source_for(&server.base_url);

    let err = require_err!(source.fetch_user("11").await);
    assert!(
        matches!(
            &err,
            ProviderError::UserNotFound { user_id, status: Some(404), .. } if user_id == "11"
        ),
        "unexpected error: {err:?}"
    );
    assert!(err.is_expected());
}

#[tokio::test]
async fn fetch_user_server_error_is_still_not_found() {
    let server = serve_once("503 Service Unavailable", "").await;
    let source = source_for(&server.base_url);

    let err = require_err!(source.fetch_user("1").await);
    assert!(
        matches!(err, ProviderError::UserNotFound { status: Some(503), .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn malformed_user_id_never_hits_the_network() {
    // 端口 9 (discard) 上没有服务；若真的发出请求会得到 NetworkError
    let source = source_for("http://127.0.0.1:9");

    let err = require_err!(source.fetch_user("../admin").await);
    assert!(
        matches!(err, ProviderError::UserNotFound { status: None, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let base_url = closed_port_url().await;

    let err = require_err!(source_for(&base_url).fetch_users().await);
    assert!(
        matches!(err, ProviderError::NetworkError { .. }),
        "unexpected error: {err:?}"
    );
}
