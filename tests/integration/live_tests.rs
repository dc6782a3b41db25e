// Runs against the server configured through API_BASE_URL / API_USERNAME /
// API_PASSWORD. Ignored by default: `cargo test -- --ignored`.

use user_api_client::prelude::*;

fn live_client() -> (Client, Config) {
    setup_logger();
    let config = Config::new();
    let client = Client::new(config.clone()).expect("client should build");
    (client, config)
}

async fn login_and_get_token(client: &Client, config: &Config) -> String {
    let request = LoginRequest::builder()
        .with_username(&config.credentials.username)
        .with_password(&config.credentials.password)
        .build();
    client
        .login_and_get_token(&request)
        .await
        .expect("configured account should log in")
}

#[tokio::test]
#[ignore]
async fn live_get_profile_returns_configured_user() {
    let (client, config) = live_client();
    let token = login_and_get_token(&client, &config).await;

    let profile: UserProfileResponse = client.get_profile(&token).await.unwrap().json().unwrap();

    assert_eq!(profile.username, config.credentials.username);
    info!("Profile retrieved for {}", profile.username);
}

#[tokio::test]
#[ignore]
async fn live_update_profile() {
    let (client, config) = live_client();
    let token = login_and_get_token(&client, &config).await;

    let update = ProfileUpdate::builder()
        .with_mobile_number("9844232432")
        .build();
    let response = client.update_profile(&update, &token).await.unwrap();

    info!("{}", response.pretty());
    assert!(response.is_success());
}

#[tokio::test]
#[ignore]
async fn live_get_profile_with_invalid_token_returns_unauthorized() {
    let (client, _) = live_client();
    let response = client.get_profile("invalid_token").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn live_get_profile_with_expired_token_returns_unauthorized() {
    let (client, _) = live_client();
    let response = client.get_profile("expired_token").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn live_update_profile_with_invalid_token_returns_unauthorized() {
    let (client, _) = live_client();
    let update = ProfileUpdate::builder()
        .with_mobile_number("1234567890")
        .build();
    let response = client
        .update_profile(&update, "invalid_token")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn live_update_profile_with_empty_payload_returns_bad_request() {
    let (client, config) = live_client();
    let token = login_and_get_token(&client, &config).await;

    let response = client
        .update_profile(&ProfileUpdate::builder().build(), &token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn live_signup_with_fresh_account() {
    let (client, _) = live_client();
    let username = unique_username("qa");
    let request = SignUpRequest::builder()
        .with_username(&username)
        .with_password("Qa@123456")
        .with_email(unique_email(&username, "example.com"))
        .with_first_name("Qa")
        .with_last_name("User")
        .with_mobile_number("9876543210")
        .build();

    let response = client.signup(&request).await.unwrap();

    info!("Signup {} -> {}", username, response.status_line());
    assert!(response.is_success());
}

#[tokio::test]
#[ignore]
async fn live_login_with_spreadsheet_credentials() {
    let (client, config) = live_client();
    let row = read_row(&config.testdata_path, "Sheet1", "LoginTest");
    if row.is_empty() {
        warn!("No LoginTest row in {}, skipping", config.testdata_path);
        return;
    }

    let request = LoginRequest::builder()
        .with_username(row.get("username").cloned().unwrap_or_default())
        .with_password(row.get("password").cloned().unwrap_or_default())
        .build();
    let response = client.login(&request).await.unwrap();

    info!("Spreadsheet login -> {}", response.status_line());
}
