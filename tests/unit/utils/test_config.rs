use std::env;
use user_api_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("UAC_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("UAC_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("UAC_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("UAC_MISSING_VAR");
        let result: String = get_env_or_default("UAC_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("UAC_TEST_VAR_INT", "42");
        let result: i32 = get_env_or_default("UAC_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("UAC_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("UAC_TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("UAC_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("UAC_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("UAC_TEST_VAR_EMPTY", "");
        let empty: String = get_env_or_default("UAC_TEST_VAR_EMPTY", "default".to_string());
        assert_eq!(empty, "default");
        env::set_var("UAC_TEST_VAR_EMPTY", "  ");
        let spaces: String = get_env_or_default("UAC_TEST_VAR_EMPTY", "default".to_string());
        assert_eq!(spaces, "default");
        env::remove_var("UAC_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none_with_value() {
    unsafe {
        env::set_var("UAC_TEST_VAR_SOME", "8080");
        let result: Option<u16> = get_env_or_none("UAC_TEST_VAR_SOME");
        assert_eq!(result, Some(8080));
        env::remove_var("UAC_TEST_VAR_SOME");
    }
}

#[test]
fn test_get_env_or_none_blank_and_missing() {
    unsafe {
        env::set_var("UAC_TEST_VAR_BLANK", "   ");
        let blank: Option<String> = get_env_or_none("UAC_TEST_VAR_BLANK");
        assert_eq!(blank, None);
        env::remove_var("UAC_TEST_VAR_BLANK");

        env::remove_var("UAC_TEST_VAR_ABSENT");
        let absent: Option<String> = get_env_or_none("UAC_TEST_VAR_ABSENT");
        assert_eq!(absent, None);
    }
}
