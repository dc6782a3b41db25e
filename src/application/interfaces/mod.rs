/// Authentication service interface
pub mod auth;
/// User management service interface
pub mod user;
