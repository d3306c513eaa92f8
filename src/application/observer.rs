//! Session lifecycle events
//!
//! The client reports authentication, close and pagination progress through
//! a [`SessionObserver`] supplied at construction. [`TracingObserver`] is the
//! default and forwards every event to `tracing`.

use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Event emitted by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session token was obtained
    Authenticated,
    /// The session endpoint refused the credentials
    AuthenticationFailed {
        /// Status returned by the session endpoint
        status: StatusCode,
    },
    /// The session was closed and the token cleared
    SessionClosed,
    /// The session close request did not return 204
    CloseFailed {
        /// Status returned by the session endpoint
        status: StatusCode,
    },
    /// One page of a paginated listing was received
    PageFetched {
        /// Endpoint path
        path: String,
        /// Offset of the page
        offset: u32,
        /// Number of items in the page
        items: usize,
    },
    /// A paginated listing reached its empty page
    PaginationFinished {
        /// Endpoint path
        path: String,
        /// Number of page requests issued
        pages: usize,
        /// Total number of items collected
        items: usize,
    },
}

/// Receives lifecycle events from the client
pub trait SessionObserver: Send + Sync {
    /// Called synchronously, on the caller's task, for every event
    fn on_event(&self, event: &SessionEvent);
}

/// Observer that logs every event with `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_event(&self, event: &SessionEvent) {
        match event {
            SessionEvent::Authenticated => info!("Authenticated with e-Boekhouden API"),
            SessionEvent::AuthenticationFailed { status } => {
                warn!("Failed to authenticate with e-Boekhouden API: {}", status)
            }
            SessionEvent::SessionClosed => info!("Session closed"),
            SessionEvent::CloseFailed { status } => {
                warn!("Failed to close session, status {}", status)
            }
            SessionEvent::PageFetched {
                path,
                offset,
                items,
            } => debug!(path = %path, offset, items, "Fetched page"),
            SessionEvent::PaginationFinished { path, pages, items } => {
                info!(path = %path, pages, items, "Pagination finished")
            }
        }
    }
}
