/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # e-Boekhouden Client Prelude
//!
//! Imports the types needed for most interactions with the API in one line.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eboekhouden_client::prelude::*;
//!
//! let credentials = Credentials::new("access-token", "MyApp").unwrap();
//! let config = Config::new(credentials);
//! let client = Client::new_lazy(config).unwrap();
//! assert!(!client.is_authenticated());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::config::{Config, Credentials, PaginationConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// API client
pub use crate::application::client::Client;

/// Session lifecycle
pub use crate::application::auth::{Session, SessionState, build_headers};

/// Lifecycle observers
pub use crate::application::observer::{SessionEvent, SessionObserver, TracingObserver};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::cost_center::CostCenterService;
pub use crate::application::interfaces::invoice::InvoiceService;
pub use crate::application::interfaces::ledger::LedgerService;
pub use crate::application::interfaces::mutation::MutationService;
pub use crate::application::interfaces::relation::RelationService;

// ============================================================================
// FILTERS AND RECORDS
// ============================================================================

/// Date filters
pub use crate::model::filter::{DateFilter, DateFilterOperator};

/// Resource records and reference data
pub use crate::presentation::{
    CostCenter, Invoice, Ledger, LedgerCategory, Mutation, MutationRow, MutationType,
    OutstandingInvoice, Relation, VatCode,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::NaiveDate;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
