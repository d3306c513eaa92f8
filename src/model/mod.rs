/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Date filter query parameters
pub mod filter;
/// HTTP request utilities
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response envelopes from API calls
pub mod responses;
