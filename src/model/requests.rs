/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Credentials sent to the login endpoint
///
/// Built once through [`LoginRequestBuilder`] and never mutated afterwards.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

impl LoginRequest {
    /// Starts a new builder
    pub fn builder() -> LoginRequestBuilder {
        LoginRequestBuilder::default()
    }

    /// Shortcut for a request carrying both credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::builder()
            .with_username(username)
            .with_password(password)
            .build()
    }

    /// Username of the login attempt
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password of the login attempt
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Builder for [`LoginRequest`]
#[derive(Debug, Clone, Default)]
pub struct LoginRequestBuilder {
    username: Option<String>,
    password: Option<String>,
}

impl LoginRequestBuilder {
    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Finishes the request
    pub fn build(self) -> LoginRequest {
        LoginRequest {
            username: self.username,
            password: self.password,
        }
    }
}

/// Registration details sent to the signup endpoint
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    mobile_number: Option<String>,
}

impl SignUpRequest {
    /// Starts a new builder
    pub fn builder() -> SignUpRequestBuilder {
        SignUpRequestBuilder::default()
    }

    /// Desired username
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Desired password
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Contact email
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Given name
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Family name
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Mobile phone number
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_deref()
    }
}

/// Builder for [`SignUpRequest`]
#[derive(Debug, Clone, Default)]
pub struct SignUpRequestBuilder {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    mobile_number: Option<String>,
}

impl SignUpRequestBuilder {
    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the mobile number
    pub fn with_mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = Some(mobile_number.into());
        self
    }

    /// Finishes the request
    pub fn build(self) -> SignUpRequest {
        SignUpRequest {
            username: self.username,
            password: self.password,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            mobile_number: self.mobile_number,
        }
    }
}

/// Partial profile update
///
/// Every field is optional; fields left unset are omitted from the JSON body,
/// so an update built with no fields serializes to `{}`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mobile_number: Option<String>,
}

impl ProfileUpdate {
    /// Starts a new builder
    pub fn builder() -> ProfileUpdateBuilder {
        ProfileUpdateBuilder::default()
    }

    /// New given name, if changed
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// New family name, if changed
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// New email, if changed
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// New mobile number, if changed
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_deref()
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.mobile_number.is_none()
    }
}

/// Builder for [`ProfileUpdate`]
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdateBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    mobile_number: Option<String>,
}

impl ProfileUpdateBuilder {
    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the mobile number
    pub fn with_mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = Some(mobile_number.into());
        self
    }

    /// Finishes the update
    pub fn build(self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            mobile_number: self.mobile_number,
        }
    }
}

/// Body of the password recovery call
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Address the recovery mail goes to
    pub email: String,
}

impl ForgotPasswordRequest {
    /// Creates the request for `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
