/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # User API Client
//!
//! Client and test-support library for the user authentication and profile
//! management REST API.
//!
//! ## Features
//!
//! - **Authentication endpoints**: login, signup and forgot-password
//! - **User management**: fetch and update the authenticated user's profile
//! - **Raw responses**: every call returns status, headers, body and timing,
//!   so non-2xx answers can be asserted on directly
//! - **Request filters**: pluggable hooks that observe each request/response
//!   pair, with a tracing-based [`LoggerFilter`](model::filter::LoggerFilter)
//! - **Spreadsheet test data**: keyed row lookup in `.xlsx` workbooks
//!
//! ## Quick start
//!
//! ```ignore
//! use user_api_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!
//!     let login = LoginRequest::builder()
//!         .with_username("jane.doe")
//!         .with_password("secret")
//!         .build();
//!     let token = client.login_and_get_token(&login).await?;
//!
//!     let profile: UserProfileResponse = client.get_profile(&token).await?.json()?;
//!     info!("Logged in as {}", profile.username);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Settings are read from the environment (and a `.env` file if present):
//!
//! ```bash
//! API_BASE_URL=http://localhost:8080
//! API_USERNAME=jane.doe
//! API_PASSWORD=secret
//! API_TESTDATA_PATH=tests/fixtures/testdata.xlsx
//! LOGLEVEL=INFO
//! ```

/// Service layer: configuration, client and service interfaces
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error types
pub mod error;

/// Request, response and transport models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Environment, logging, identifier and spreadsheet utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
