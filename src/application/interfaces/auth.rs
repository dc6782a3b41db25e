use crate::error::AppError;
use crate::model::requests::{LoginRequest, SignUpRequest};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the authentication endpoints
///
/// Every operation returns the raw response, so rejected credentials show up
/// as a non-2xx [`ApiResponse`] rather than an error.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with the given credentials (`POST /api/auth/login`)
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, AppError>;

    /// Registers a new account (`POST /api/auth/signup`)
    async fn signup(&self, request: &SignUpRequest) -> Result<ApiResponse, AppError>;

    /// Starts password recovery for `email` (`POST /api/auth/forgot-password`)
    ///
    /// The body sent is `{"email": "<email>"}`.
    async fn forgot_password(&self, email: &str) -> Result<ApiResponse, AppError>;
}
