use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TESTDATA_PATH};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Account used by the live test suite
pub struct Credentials {
    /// Username to log in with
    pub username: String,
    /// Password to log in with
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the API client and test suite
pub struct Config {
    /// Credentials of the test account
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Workbook holding tabular test data
    pub testdata_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment
    ///
    /// A `.env` file in the working directory is read first when present.
    /// Recognised variables: `API_BASE_URL`, `API_USERNAME`, `API_PASSWORD`
    /// and `API_TESTDATA_PATH`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_none::<String>("API_USERNAME").unwrap_or_else(|| {
            error!("API_USERNAME not found in environment variables or .env file");
            String::from("default_username")
        });
        let password = get_env_or_none::<String>("API_PASSWORD").unwrap_or_else(|| {
            error!("API_PASSWORD not found in environment variables or .env file");
            String::from("default_password")
        });

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_BASE_URL", String::from(DEFAULT_BASE_URL)),
            },
            testdata_path: get_env_or_default(
                "API_TESTDATA_PATH",
                String::from(DEFAULT_TESTDATA_PATH),
            ),
        }
    }

    /// Configuration pointing at `base_url`, with placeholder credentials
    ///
    /// Does not read the environment, which keeps tests against local mock
    /// servers independent of the machine they run on.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                username: String::from("default_username"),
                password: String::from("default_password"),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            testdata_path: String::from(DEFAULT_TESTDATA_PATH),
        }
    }

    /// Replaces the credentials
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Credentials {
            username: username.into(),
            password: password.into(),
        };
        self
    }
}
