/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Response from the session open endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionResponse {
    /// Session token to send as bearer credential
    #[serde(default)]
    pub token: Option<String>,
}

impl SessionResponse {
    /// The token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Envelope of every list endpoint, `{ "items": [...] }`
///
/// A body without `items` reads as an empty page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemsResponse<T> {
    /// Items of this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the page
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
