//! # e-Boekhouden Client
//!
//! A client for the e-Boekhouden REST API. The client exchanges an access
//! token for a session token, attaches that token to every request, and
//! exposes typed accessors for cost centers, invoices, ledgers, mutations and
//! relations.
//!
//! ## Usage
//!
//! ```ignore
//! use eboekhouden_client::prelude::*;
//!
//! let config = Config::from_env()?;
//! let mut client = Client::new(config).await?;
//!
//! let filter = DateFilter::range("date", "2024-01-01", "2024-12-31")?;
//! let mutations = client.get_mutations(Some(&filter)).await?;
//!
//! client.close().await?;
//! ```
//!
//! Logging goes through `tracing`. Nothing is installed by the library; call
//! [`utils::logger::setup_logger`] from a binary to get console output.

/// Application layer: configuration, session handling, client and service traits
pub mod application;

/// Constants shared across the crate
pub mod constants;

/// Error types
pub mod error;

/// Wire-level models and HTTP plumbing
pub mod model;

/// Convenience re-exports
pub mod prelude;

/// Typed resource records returned by the API
pub mod presentation;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
