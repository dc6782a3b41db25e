/// API client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;

pub use interfaces::auth::*;
pub use interfaces::user::*;
