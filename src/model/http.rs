/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Builds the full URL of an endpoint
///
/// `path` may be given with or without a leading slash. It is always joined
/// under `base_url`, so requests never leave the configured host.
pub fn endpoint_url(base_url: &str, api_version: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let version = api_version.trim_matches('/');
    let path = path.trim_start_matches('/');
    if version.is_empty() {
        format!("{base}/{path}")
    } else {
        format!("{base}/{version}/{path}")
    }
}

/// Sends a single HTTP request and returns the raw response
///
/// There is no retry and no status handling here: the caller decides which
/// status counts as success (200 for reads, 204 for session close). Only
/// transport failures and timeouts are returned as errors.
///
/// # Arguments
///
/// * `client` - The HTTP client, carrying the per-request timeout
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Headers to attach
/// * `query` - Query pairs, may be empty
/// * `body` - Optional request body, serialized as JSON
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: HeaderMap,
    query: &[(String, String)],
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).headers(headers);

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Passes the response through if its status is `expected`, otherwise turns
/// it into `AppError::Http` carrying the status and body
pub async fn expect_status(response: Response, expected: StatusCode) -> Result<Response, AppError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Http { status, body })
}

/// Deserializes a JSON response body
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    Ok(response.json().await?)
}
