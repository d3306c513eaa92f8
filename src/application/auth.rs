/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Session handling for the e-Boekhouden API
//!
//! The session moves through three states:
//!
//! ```text
//! Unauthenticated --authenticate()--> Authenticated --close()--> Closed
//! ```
//!
//! Only `Authenticated` carries a token. Every request header set is built by
//! [`build_headers`], which refuses to produce headers without a token, so no
//! request can leave the client unauthenticated by accident.

use crate::application::config::Config;
use crate::application::observer::{SessionEvent, SessionObserver};
use crate::constants::SESSION_PATH;
use crate::error::AppError;
use crate::model::http::{endpoint_url, make_http_request, parse_response};
use crate::model::requests::SessionRequest;
use crate::model::responses::SessionResponse;
use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const APPLICATION_JSON: &str = "application/json";

/// An open session
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Wraps a freshly issued session token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            created_at: Utc::now(),
        }
    }

    /// The bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When the token was obtained
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Seconds since the token was obtained
    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.created_at).num_seconds()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Lifecycle state of a client's session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No session has been opened, or the last attempt failed
    #[default]
    Unauthenticated,
    /// A session token is held
    Authenticated(Session),
    /// The session was closed on the server
    Closed,
}

impl SessionState {
    /// The session, only in `Authenticated`
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated | SessionState::Closed => None,
        }
    }
}

/// Builds the header set of an authenticated request
///
/// `Accept` and `Content-Type` are JSON and `Authorization` carries the
/// bearer token.
///
/// # Errors
/// `AppError::NotAuthenticated` when the token is absent or empty
pub fn build_headers(session_token: Option<&str>) -> Result<HeaderMap, AppError> {
    let token = session_token
        .filter(|t| !t.is_empty())
        .ok_or(AppError::NotAuthenticated)?;

    let bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        AppError::Configuration("session token is not a valid header value".to_string())
    })?;

    let mut headers = json_headers();
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers
}

/// Session manager for the e-Boekhouden API
///
/// State changes (`authenticate`, `close`) take `&mut self`; everything else
/// reads through `&self`.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    state: SessionState,
    observer: Arc<dyn SessionObserver>,
}

impl Auth {
    /// Creates an unauthenticated session manager
    ///
    /// # Arguments
    /// * `config` - Configuration holding credentials and endpoint
    /// * `client` - HTTP client shared with the resource calls
    /// * `observer` - Receiver of lifecycle events
    pub fn new(config: Arc<Config>, client: Client, observer: Arc<dyn SessionObserver>) -> Self {
        Self {
            config,
            client,
            state: SessionState::Unauthenticated,
            observer,
        }
    }

    /// Exchanges the credentials for a session token
    ///
    /// Works from any state; from `Closed` it opens a new session. When a
    /// session is already open its token is replaced without closing it on
    /// the server; call [`Auth::close`] first to end it. Any failure leaves
    /// the manager `Unauthenticated`. There is no retry.
    ///
    /// # Errors
    /// `AppError::Authentication` on a non-200 response or a response without
    /// a token, `AppError::Network` on transport failure
    pub async fn authenticate(&mut self) -> Result<(), AppError> {
        info!("Authenticating with e-Boekhouden API");
        if let Some(session) = self.session() {
            warn!(
                "Replacing a session opened {}s ago without closing it",
                session.age_seconds()
            );
        }

        match self.open_session().await {
            Ok(token) => {
                self.state = SessionState::Authenticated(Session::new(token));
                self.observer.on_event(&SessionEvent::Authenticated);
                Ok(())
            }
            Err(e) => {
                self.state = SessionState::Unauthenticated;
                if let AppError::Authentication { status, .. } = &e {
                    self.observer
                        .on_event(&SessionEvent::AuthenticationFailed { status: *status });
                }
                Err(e)
            }
        }
    }

    async fn open_session(&self) -> Result<String, AppError> {
        let url = self.session_url();
        let body = SessionRequest::from(&self.config.credentials);

        debug!("Sending session request to: {}", url);

        let response = make_http_request(
            &self.client,
            Method::POST,
            &url,
            json_headers(),
            &[],
            Some(&body),
        )
        .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Authentication { status, body });
        }

        let session: SessionResponse = parse_response(response).await?;
        match session.token() {
            Some(token) => Ok(token.to_string()),
            None => {
                error!("Session response did not contain a token");
                Err(AppError::Authentication {
                    status,
                    body: "missing session token".to_string(),
                })
            }
        }
    }

    /// Closes the session on the server
    ///
    /// Returns `Ok(true)` on 204, after which the token is cleared. Any other
    /// status returns `Ok(false)` and keeps the session so the caller can try
    /// again.
    ///
    /// # Errors
    /// `AppError::NotAuthenticated` without a session, `AppError::Network` on
    /// transport failure
    pub async fn close(&mut self) -> Result<bool, AppError> {
        let headers = self.headers()?;
        let url = self.session_url();

        info!("Closing session");

        let response = make_http_request(
            &self.client,
            Method::DELETE,
            &url,
            headers,
            &[],
            None::<&()>,
        )
        .await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            self.state = SessionState::Closed;
            self.observer.on_event(&SessionEvent::SessionClosed);
            return Ok(true);
        }

        warn!("Session close returned status {}", status);
        self.observer.on_event(&SessionEvent::CloseFailed { status });
        Ok(false)
    }

    /// Headers for an authenticated request
    ///
    /// # Errors
    /// `AppError::NotAuthenticated` unless the state is `Authenticated`
    pub fn headers(&self) -> Result<HeaderMap, AppError> {
        build_headers(self.session_token())
    }

    /// Current lifecycle state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    /// The session token, if any
    pub fn session_token(&self) -> Option<&str> {
        self.session().map(Session::token)
    }

    /// Whether a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    fn session_url(&self) -> String {
        endpoint_url(
            &self.config.rest_api.base_url,
            &self.config.rest_api.api_version,
            SESSION_PATH,
        )
    }
}
