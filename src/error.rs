/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Error type returned by every fallible operation of the client
#[derive(Debug)]
pub enum AppError {
    /// Missing or invalid configuration, credentials or filter arguments.
    /// Raised locally, nothing is sent over the network.
    Configuration(String),
    /// The session endpoint refused the credentials
    Authentication {
        /// Status returned by the session endpoint
        status: StatusCode,
        /// Response body, possibly empty
        body: String,
    },
    /// A call that needs a session token was made without one
    NotAuthenticated,
    /// A resource call returned a non-success status
    Http {
        /// Status returned by the endpoint
        status: StatusCode,
        /// Response body, possibly empty
        body: String,
    },
    /// Pagination stopped at the page bound before the server returned an empty page
    IncompletePagination {
        /// Number of pages requested
        pages: usize,
        /// Number of items collected before giving up
        items: usize,
    },
    /// Transport failure or timeout
    Network(reqwest::Error),
    /// Invalid JSON
    Json(serde_json::Error),
    /// A response body did not match the expected record
    Deserialization(String),
    /// File system failure
    Io(std::io::Error),
}

impl AppError {
    /// Status code carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication { status, .. } | AppError::Http { status, .. } => {
                Some(*status)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Authentication { status, body } => {
                write!(f, "authentication failed with status {status}: {body}")
            }
            AppError::NotAuthenticated => {
                write!(f, "authentication required, call authenticate() first")
            }
            AppError::Http { status, body } => write!(f, "http error {status}: {body}"),
            AppError::IncompletePagination { pages, items } => write!(
                f,
                "incomplete pagination: stopped after {pages} pages with {items} items"
            ),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
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
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Deserialization(err.to_string());
        }
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
