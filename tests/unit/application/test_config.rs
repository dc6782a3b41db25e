use std::env;
use user_api_client::application::config::Config;
use user_api_client::constants::{DEFAULT_BASE_URL, DEFAULT_TESTDATA_PATH};

#[test]
fn config_reads_environment() {
    unsafe {
        env::set_var("API_BASE_URL", "http://api.test:9090");
        env::set_var("API_USERNAME", "env.user");
        env::set_var("API_PASSWORD", "env.pass");
        env::set_var("API_TESTDATA_PATH", "data/users.xlsx");
    }

    let config = Config::new();

    unsafe {
        env::set_var("API_BASE_URL", "");
        env::set_var("API_USERNAME", " ");
    }

    let blank = Config::new();

    unsafe {
        env::remove_var("API_BASE_URL");
        env::remove_var("API_USERNAME");
        env::remove_var("API_PASSWORD");
        env::remove_var("API_TESTDATA_PATH");
    }

    assert_eq!(config.rest_api.base_url, "http://api.test:9090");
    assert_eq!(config.credentials.username, "env.user");
    assert_eq!(config.credentials.password, "env.pass");
    assert_eq!(config.testdata_path, "data/users.xlsx");

    assert_eq!(blank.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(blank.credentials.username, "default_username");
    assert_eq!(blank.credentials.password, "env.pass");
}

#[test]
fn with_base_url_ignores_environment() {
    let config = Config::with_base_url("http://127.0.0.1:1234");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:1234");
    assert_eq!(config.credentials.username, "default_username");
    assert_eq!(config.testdata_path, DEFAULT_TESTDATA_PATH);
}

#[test]
fn with_credentials_replaces_account() {
    let config = Config::with_base_url(DEFAULT_BASE_URL).with_credentials("jane.doe", "Secret@123");
    assert_eq!(config.credentials.username, "jane.doe");
    assert_eq!(config.credentials.password, "Secret@123");
}

#[test]
fn config_round_trips_through_json() {
    let config = Config::with_base_url(DEFAULT_BASE_URL);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"base_url\":\"http://localhost:8080\""));
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
