use crate::constants::{
    BASE_URL, DEFAULT_API_VERSION, DEFAULT_MAX_PAGES, PAGE_LIMIT, REQUEST_TIMEOUT_SECS,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_required};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Shape of a credentials file, before validation
#[derive(Deserialize)]
struct CredentialsFile {
    access_token: Option<String>,
    source: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "CredentialsFile")]
/// Credentials exchanged for a session token
///
/// Both fields are required and must be non-empty; the constructors enforce
/// this and the fields stay private so a `Credentials` value is always valid.
pub struct Credentials {
    #[serde(skip_serializing)]
    access_token: String,
    source: String,
}

impl Credentials {
    /// Creates validated credentials
    ///
    /// # Errors
    /// `AppError::Configuration` if either field is empty
    pub fn new(access_token: impl Into<String>, source: impl Into<String>) -> Result<Self, AppError> {
        let credentials = Self {
            access_token: access_token.into(),
            source: source.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Loads credentials from a JSON file path or, if no such file exists,
    /// from an inline JSON string
    ///
    /// The JSON must hold `access_token` and `source`.
    ///
    /// # Errors
    /// `AppError::Io` when the file cannot be read, `AppError::Json` for
    /// malformed JSON, `AppError::Configuration` for missing fields
    pub fn load(credentials: &str) -> Result<Self, AppError> {
        let path = Path::new(credentials);
        if path.is_file() {
            return Self::from_file(path);
        }
        Self::from_json(credentials)
    }

    /// Loads credentials from a JSON file
    ///
    /// # Errors
    /// See [`Credentials::load`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read credentials file {}: {}", path.display(), e);
            e
        })?;
        debug!("Loaded credentials from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses credentials from a JSON string
    ///
    /// # Errors
    /// See [`Credentials::load`]
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let raw: CredentialsFile = serde_json::from_str(json).map_err(|e| {
            error!("Failed to load credentials: {}", e);
            e
        })?;
        Self::try_from(raw)
    }

    /// Access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Source identifier of the calling application
    pub fn source(&self) -> &str {
        &self.source
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.access_token.trim().is_empty() || self.source.trim().is_empty() {
            return Err(AppError::Configuration(
                "credentials must contain 'access_token' and 'source' fields".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<CredentialsFile> for Credentials {
    type Error = AppError;

    fn try_from(raw: CredentialsFile) -> Result<Self, Self::Error> {
        Self::new(
            raw.access_token.unwrap_or_default(),
            raw.source.unwrap_or_default(),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"***")
            .field("source", &self.source)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, without the version segment
    pub base_url: String,
    /// Version segment inserted between base URL and endpoint, e.g. "v1"
    pub api_version: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
}

impl RestApiConfig {
    /// Reads `EBOEKHOUDEN_BASE_URL`, `EBOEKHOUDEN_API_VERSION` and
    /// `EBOEKHOUDEN_TIMEOUT`; invalid or zero values fall back to the defaults
    pub fn from_env() -> Self {
        Self {
            base_url: get_env_or_default("EBOEKHOUDEN_BASE_URL", BASE_URL.to_string()),
            api_version: get_env_or_default(
                "EBOEKHOUDEN_API_VERSION",
                DEFAULT_API_VERSION.to_string(),
            ),
            timeout: positive_or_default(
                "EBOEKHOUDEN_TIMEOUT",
                get_env_or_default("EBOEKHOUDEN_TIMEOUT", REQUEST_TIMEOUT_SECS),
                REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Paging behaviour of list endpoints that span several pages
pub struct PaginationConfig {
    /// Items requested per page
    pub page_limit: u32,
    /// Maximum page requests per call; `None` keeps requesting until an empty page
    pub max_pages: Option<usize>,
}

impl PaginationConfig {
    /// Reads `EBOEKHOUDEN_PAGE_LIMIT` and `EBOEKHOUDEN_MAX_PAGES` (0 disables
    /// the bound); invalid values fall back to the defaults
    pub fn from_env() -> Self {
        let page_limit = positive_or_default(
            "EBOEKHOUDEN_PAGE_LIMIT",
            get_env_or_default("EBOEKHOUDEN_PAGE_LIMIT", PAGE_LIMIT),
            PAGE_LIMIT,
        );
        let max_pages = match get_env_or_default("EBOEKHOUDEN_MAX_PAGES", DEFAULT_MAX_PAGES) {
            0 => None,
            n => Some(n),
        };
        Self {
            page_limit,
            max_pages,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_limit: PAGE_LIMIT,
            max_pages: Some(DEFAULT_MAX_PAGES),
        }
    }
}

#[derive(Debug, Clone)]
/// Main configuration for the e-Boekhouden client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Pagination configuration
    pub pagination: PaginationConfig,
}

impl Config {
    /// Configuration with default endpoint, timeout and paging
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }

    /// Builds the configuration from environment variables and an optional
    /// `.env` file
    ///
    /// `EBOEKHOUDEN_CREDENTIALS` is required and holds a file path or inline
    /// JSON. `EBOEKHOUDEN_BASE_URL`, `EBOEKHOUDEN_API_VERSION`,
    /// `EBOEKHOUDEN_TIMEOUT`, `EBOEKHOUDEN_PAGE_LIMIT` and
    /// `EBOEKHOUDEN_MAX_PAGES` (0 disables the bound) are optional.
    ///
    /// # Errors
    /// Fails when the credentials are missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials::load(&get_env_required("EBOEKHOUDEN_CREDENTIALS")?)?;

        Ok(Self {
            credentials,
            rest_api: RestApiConfig::from_env(),
            pagination: PaginationConfig::from_env(),
        })
    }

    /// Replaces the base URL, e.g. to point at a mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Replaces the pagination settings
    #[must_use]
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }
}

fn positive_or_default<T>(env_var: &str, value: T, default: T) -> T
where
    T: PartialEq + Default + fmt::Display,
{
    if value == T::default() {
        error!("{} must be positive, using {}", env_var, default);
        return default;
    }
    value
}
