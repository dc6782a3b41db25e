/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors produced by the client and its utilities
///
/// Non-2xx HTTP answers are not errors at the transport layer; they only show
/// up here as [`AppError::Unexpected`] from helpers that need a successful
/// response to continue (for example extracting a login token).
#[derive(Debug)]
pub enum AppError {
    /// Transport failure reported by the HTTP stack
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// File system failure
    Io(std::io::Error),
    /// Workbook could not be opened or parsed
    Spreadsheet(String),
    /// Response body did not match the expected shape
    Deserialization(String),
    /// Caller supplied an unusable value
    InvalidInput(String),
    /// Server rejected the credentials
    Unauthorized,
    /// Requested resource does not exist
    NotFound,
    /// Response status was not the one the operation needs
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Spreadsheet(msg) => write!(f, "spreadsheet error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<calamine::XlsxError> for AppError {
    fn from(e: calamine::XlsxError) -> Self {
        AppError::Spreadsheet(e.to_string())
    }
}

impl From<StatusCode> for AppError {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound,
            other => AppError::Unexpected(other),
        }
    }
}
