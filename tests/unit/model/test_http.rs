use std::sync::Arc;
use user_api_client::application::config::Config;
use user_api_client::error::AppError;
use user_api_client::model::filter::{LoggerFilter, RequestFilter};
use user_api_client::model::http::HttpClient;

#[test]
fn url_for_joins_with_single_slash() {
    let client = HttpClient::new(&Config::with_base_url("http://localhost:8080/")).unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(
        client.url_for("/api/users/profile"),
        "http://localhost:8080/api/users/profile"
    );
    assert_eq!(
        client.url_for("api/auth/login"),
        "http://localhost:8080/api/auth/login"
    );
}

#[test]
fn url_for_keeps_absolute_urls() {
    let client = HttpClient::new(&Config::with_base_url("http://localhost:8080")).unwrap();
    assert_eq!(
        client.url_for("https://other.example.com/health"),
        "https://other.example.com/health"
    );
}

#[test]
fn empty_base_url_is_rejected() {
    let result = HttpClient::with_filters(&Config::with_base_url(""), Vec::new());
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn auth_token_can_be_set_and_cleared() {
    let filters: Vec<Arc<dyn RequestFilter>> = vec![Arc::new(LoggerFilter)];
    let client =
        HttpClient::with_filters(&Config::with_base_url("http://localhost:8080"), filters).unwrap();

    assert_eq!(client.auth_token().await, None);
    client.set_auth_token("first").await;
    client.set_auth_token("second").await;
    assert_eq!(client.auth_token().await.as_deref(), Some("second"));
    client.clear_auth_token().await;
    assert_eq!(client.auth_token().await, None);
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Port 9 (discard) is not expected to accept HTTP connections
    let client = HttpClient::with_filters(&Config::with_base_url("http://127.0.0.1:9"), Vec::new())
        .unwrap();
    let result = client.get("/api/users/profile").await;
    assert!(matches!(result, Err(AppError::Network(_))));
}
