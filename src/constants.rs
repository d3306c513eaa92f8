/// Base URL of the e-Boekhouden REST API
pub const BASE_URL: &str = "https://api.e-boekhouden.nl";
/// API version appended to the base URL
pub const DEFAULT_API_VERSION: &str = "v1";
/// Maximum number of items requested per page on paginated endpoints
pub const PAGE_LIMIT: u32 = 100;
/// Maximum number of page requests issued by a single paginated call
pub const DEFAULT_MAX_PAGES: usize = 1000;
/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("eboekhouden-client/", env!("CARGO_PKG_VERSION"));
/// Query parameter name used when no other date field is given
pub const DEFAULT_DATE_PARAMETER: &str = "date";

/// Session endpoint, POST to open and DELETE to close
pub const SESSION_PATH: &str = "session";
/// Cost center endpoint
pub const COST_CENTER_PATH: &str = "costcenter";
/// Invoice endpoint
pub const INVOICE_PATH: &str = "invoice";
/// Ledger endpoint
pub const LEDGER_PATH: &str = "ledger";
/// Mutation endpoint
pub const MUTATION_PATH: &str = "mutation";
/// Outstanding invoices, listed under the mutation endpoint
pub const OUTSTANDING_INVOICE_PATH: &str = "mutation/invoice/outstanding";
/// Relation endpoint
pub const RELATION_PATH: &str = "relation";
