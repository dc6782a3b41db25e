/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("user-api-client/", env!("CARGO_PKG_VERSION"));
/// Base URL used when `API_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Workbook used for tabular test data when `API_TESTDATA_PATH` is not configured
pub const DEFAULT_TESTDATA_PATH: &str = "tests/fixtures/testdata.xlsx";

/// Prefix shared by the authentication endpoints
pub const AUTH_BASE_PATH: &str = "/api/auth/";
/// Login endpoint, relative to [`AUTH_BASE_PATH`]
pub const LOGIN_ENDPOINT: &str = "login";
/// Signup endpoint, relative to [`AUTH_BASE_PATH`]
pub const SIGNUP_ENDPOINT: &str = "signup";
/// Password recovery endpoint, relative to [`AUTH_BASE_PATH`]
pub const FORGOT_PASSWORD_ENDPOINT: &str = "forgot-password";
/// Profile endpoint of the authenticated user (GET and PUT)
pub const PROFILE_PATH: &str = "/api/users/profile";

/// Name of the authorization header
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Scheme prefix of the authorization header value
pub const BEARER_PREFIX: &str = "Bearer ";
/// Default content type of request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
