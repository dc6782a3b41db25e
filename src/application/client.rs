/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the authentication and user management API
//!
//! [`Client`] binds the endpoint paths to a shared [`HttpClient`] and exposes
//! them through the [`AuthService`] and [`UserManagementService`] traits.
//!
//! # Example
//! ```ignore
//! use user_api_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.get_profile("invalid_token").await?;
//! assert_eq!(response.status_code(), 401);
//! ```

use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::user::UserManagementService;
use crate::constants::{
    AUTH_BASE_PATH, FORGOT_PASSWORD_ENDPOINT, LOGIN_ENDPOINT, PROFILE_PATH, SIGNUP_ENDPOINT,
};
use crate::error::AppError;
use crate::model::filter::RequestFilter;
use crate::model::http::HttpClient;
use crate::model::requests::{ForgotPasswordRequest, LoginRequest, ProfileUpdate, SignUpRequest};
use crate::model::responses::{ApiResponse, LoginResponse};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// API client with logging of all traffic
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for `config` with the default logging filter
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(&config)?)))
    }

    /// Creates a client for `config` running `filters` around every call
    pub fn with_filters(
        config: Config,
        filters: Vec<Arc<dyn RequestFilter>>,
    ) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::with_filters(
            &config, filters,
        )?)))
    }

    /// Wraps an existing HTTP client
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Logs in and returns the bearer token from the response body
    ///
    /// # Returns
    /// * `Ok(String)` - Token issued by the server
    /// * `Err(AppError)` - If the login is rejected or the body carries no token
    pub async fn login_and_get_token(&self, request: &LoginRequest) -> Result<String, AppError> {
        let response = self.login(request).await?.error_for_status()?;
        let login: LoginResponse = response.json()?;
        debug!("Token obtained for {}", request.username().unwrap_or_default());
        Ok(login.token)
    }
}

fn auth_path(endpoint: &str) -> String {
    format!("{AUTH_BASE_PATH}{endpoint}")
}

#[async_trait]
impl AuthService for Client {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, AppError> {
        info!("Logging in as {}", request.username().unwrap_or_default());
        self.http_client
            .post(&auth_path(LOGIN_ENDPOINT), request)
            .await
    }

    async fn signup(&self, request: &SignUpRequest) -> Result<ApiResponse, AppError> {
        info!("Signing up {}", request.username().unwrap_or_default());
        self.http_client
            .post(&auth_path(SIGNUP_ENDPOINT), request)
            .await
    }

    async fn forgot_password(&self, email: &str) -> Result<ApiResponse, AppError> {
        info!("Requesting password recovery for {}", email);
        let payload = ForgotPasswordRequest::new(email);
        self.http_client
            .post(&auth_path(FORGOT_PASSWORD_ENDPOINT), &payload)
            .await
    }
}

#[async_trait]
impl UserManagementService for Client {
    async fn get_profile(&self, token: &str) -> Result<ApiResponse, AppError> {
        info!("Getting user profile");
        self.http_client.set_auth_token(token).await;
        self.http_client
            .request_with_token(Method::GET, PROFILE_PATH, None::<&()>, Some(token))
            .await
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &str,
    ) -> Result<ApiResponse, AppError> {
        info!("Updating user profile");
        self.http_client.set_auth_token(token).await;
        self.http_client
            .request_with_token(Method::PUT, PROFILE_PATH, Some(update), Some(token))
            .await
    }
}
