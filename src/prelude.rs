/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # User API Client Prelude
//!
//! Brings the commonly used types, traits and helpers into scope with a
//! single import.
//!
//! ```rust
//! use user_api_client::prelude::*;
//!
//! let update = ProfileUpdate::builder().with_mobile_number("9844232432").build();
//! assert!(!update.is_empty());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the API client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SERVICES
// ============================================================================

/// Service interfaces
pub use crate::application::interfaces::auth::AuthService;
pub use crate::application::interfaces::user::UserManagementService;

/// Client implementing every service interface
pub use crate::application::client::Client;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client and request filters
pub use crate::model::filter::{LoggerFilter, RequestFilter};
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    ForgotPasswordRequest, LoginRequest, LoginRequestBuilder, ProfileUpdate, ProfileUpdateBuilder,
    SignUpRequest, SignUpRequestBuilder,
};

/// Response models
pub use crate::model::responses::{ApiResponse, LoginResponse, UserProfileResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::{setup_logger, setup_logger_with_level};

/// Spreadsheet test data
pub use crate::utils::excel::{RowData, read_row, try_read_row};

/// Unique identifiers for test accounts
pub use crate::utils::id::{unique_email, unique_username};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
