/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::model::filter::DateFilter;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of the session open request
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    /// Long-lived API access token
    pub access_token: String,
    /// Identifier of the calling application
    pub source: String,
}

impl From<&Credentials> for SessionRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            access_token: credentials.access_token().to_string(),
            source: credentials.source().to_string(),
        }
    }
}

/// Offset/limit pair sent with every page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct PageQuery {
    /// Index of the first item of the page
    pub offset: u32,
    /// Maximum number of items in the page
    pub limit: u32,
}

impl PageQuery {
    /// First page for the given limit
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Query for the page after this one
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// Query pairs for this page, merged after the optional date filter
    pub fn to_query(&self, filter: Option<&DateFilter>) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(filter) = filter {
            query.push(filter.query_pair());
        }
        query.push(("offset".to_string(), self.offset.to_string()));
        query.push(("limit".to_string(), self.limit.to_string()));
        query
    }
}
