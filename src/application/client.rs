/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Client for the e-Boekhouden API
//!
//! The client owns one session. Resource calls build their headers from that
//! session before touching the network, so a call on a client that never
//! authenticated (or has been closed) fails with
//! [`AppError::NotAuthenticated`] without sending anything.
//!
//! # Example
//! ```ignore
//! use eboekhouden_client::prelude::*;
//!
//! let mut client = Client::new(Config::from_env()?).await?;
//! let ledgers = client.get_ledgers().await?;
//! client.close().await?;
//! ```

use crate::application::auth::{Auth, Session, SessionState};
use crate::application::config::Config;
use crate::application::interfaces::cost_center::CostCenterService;
use crate::application::interfaces::invoice::InvoiceService;
use crate::application::interfaces::ledger::LedgerService;
use crate::application::interfaces::mutation::MutationService;
use crate::application::interfaces::relation::RelationService;
use crate::application::observer::{SessionEvent, SessionObserver, TracingObserver};
use crate::constants::{
    COST_CENTER_PATH, DEFAULT_DATE_PARAMETER, INVOICE_PATH, LEDGER_PATH, MUTATION_PATH,
    OUTSTANDING_INVOICE_PATH, RELATION_PATH, USER_AGENT,
};
use crate::error::AppError;
use crate::model::filter::{DateFilter, DateFilterOperator};
use crate::model::http::{endpoint_url, expect_status, make_http_request, parse_response};
use crate::model::requests::PageQuery;
use crate::model::responses::ItemsResponse;
use crate::presentation::cost_center::CostCenter;
use crate::presentation::invoice::{Invoice, OutstandingInvoice};
use crate::presentation::ledger::Ledger;
use crate::presentation::mutation::Mutation;
use crate::presentation::relation::Relation;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the e-Boekhouden API
pub struct Client {
    auth: Auth,
    http_client: HttpClient,
    config: Arc<Config>,
    observer: Arc<dyn SessionObserver>,
}

impl Client {
    /// Creates a new client and opens a session
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built or authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let mut client = Self::new_lazy(config)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Creates a client without opening a session
    ///
    /// Resource calls fail with `NotAuthenticated` until
    /// [`Client::authenticate`] succeeds.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    /// Creates a client without opening a session, reporting lifecycle
    /// events to `observer`
    pub fn with_observer(
        config: Config,
        observer: Arc<dyn SessionObserver>,
    ) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Auth::new(config.clone(), http_client.clone(), observer.clone());

        Ok(Self {
            auth,
            http_client,
            config,
            observer,
        })
    }

    /// Opens a session, replacing any previous one
    pub async fn authenticate(&mut self) -> Result<(), AppError> {
        self.auth.authenticate().await
    }

    /// Closes the session
    ///
    /// `Ok(false)` means the server did not confirm the close; the session is
    /// kept and `close` may be called again.
    pub async fn close(&mut self) -> Result<bool, AppError> {
        self.auth.close().await
    }

    /// Current lifecycle state
    pub fn state(&self) -> &SessionState {
        self.auth.state()
    }

    /// The open session, if any
    pub fn session(&self) -> Option<&Session> {
        self.auth.session()
    }

    /// The session token, if any
    pub fn session_token(&self) -> Option<&str> {
        self.auth.session_token()
    }

    /// Whether a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes an authenticated GET request and parses the 200 response body
    ///
    /// # Arguments
    /// * `path` - Endpoint path below the versioned base, e.g. "ledger/12"
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - `NotAuthenticated` before any I/O, `Http` on a non-200 status
    pub async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, AppError> {
        self.get_with_query(path, &[]).await
    }

    /// Makes an authenticated GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, AppError> {
        let headers = self.auth.headers()?;
        let url = endpoint_url(
            &self.config.rest_api.base_url,
            &self.config.rest_api.api_version,
            path,
        );

        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            headers,
            query,
            None::<&()>,
        )
        .await?;

        let response = expect_status(response, StatusCode::OK).await?;
        parse_response(response).await
    }

    /// Gets the `items` of a single-page list endpoint
    async fn get_items<T: DeserializeOwned + Send>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let response: ItemsResponse<T> = self.get(path).await?;
        debug!("{} returned {} items", path, response.len());
        Ok(response.items)
    }

    /// Gets every item of a paginated list endpoint
    ///
    /// Requests pages of `page_limit` items at increasing offsets until an
    /// empty page arrives. The optional filter is sent with every page. An
    /// error on any page aborts the call and drops the items collected so
    /// far.
    ///
    /// # Errors
    /// `AppError::IncompletePagination` when `max_pages` requests were made
    /// without reaching an empty page
    pub async fn get_paginated<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        filter: Option<&DateFilter>,
    ) -> Result<Vec<T>, AppError> {
        let page_limit = self.config.pagination.page_limit;
        let max_pages = self.config.pagination.max_pages;
        if page_limit == 0 {
            return Err(AppError::Configuration(
                "page limit must be positive".to_string(),
            ));
        }

        let mut all_items: Vec<T> = Vec::new();
        let mut page = PageQuery::first(page_limit);
        let mut pages = 0usize;

        loop {
            if max_pages.is_some_and(|max| pages >= max) {
                warn!(
                    "Stopping {} after {} pages without reaching the last page",
                    path, pages
                );
                return Err(AppError::IncompletePagination {
                    pages,
                    items: all_items.len(),
                });
            }

            let query = page.to_query(filter);
            let response: ItemsResponse<T> = self.get_with_query(path, &query).await?;
            pages += 1;

            self.observer.on_event(&SessionEvent::PageFetched {
                path: path.to_string(),
                offset: page.offset,
                items: response.len(),
            });

            if response.is_empty() {
                break;
            }

            all_items.extend(response.items);
            page = page.next();
        }

        self.observer.on_event(&SessionEvent::PaginationFinished {
            path: path.to_string(),
            pages,
            items: all_items.len(),
        });

        Ok(all_items)
    }
}

#[async_trait]
impl CostCenterService for Client {
    async fn get_cost_centers(&self) -> Result<Vec<CostCenter>, AppError> {
        info!("Getting cost centers");
        self.get_items(COST_CENTER_PATH).await
    }

    async fn get_cost_center(&self, id: i64) -> Result<CostCenter, AppError> {
        debug!("Getting cost center {}", id);
        self.get(&format!("{COST_CENTER_PATH}/{id}")).await
    }
}

#[async_trait]
impl InvoiceService for Client {
    async fn get_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        info!("Getting invoices");
        self.get_items(INVOICE_PATH).await
    }

    async fn get_invoice(&self, id: i64) -> Result<Invoice, AppError> {
        debug!("Getting invoice {}", id);
        self.get(&format!("{INVOICE_PATH}/{id}")).await
    }
}

#[async_trait]
impl LedgerService for Client {
    async fn get_ledgers(&self) -> Result<Vec<Ledger>, AppError> {
        info!("Getting ledgers");
        self.get_items(LEDGER_PATH).await
    }

    async fn get_ledger(&self, id: i64) -> Result<Ledger, AppError> {
        debug!("Getting ledger {}", id);
        self.get(&format!("{LEDGER_PATH}/{id}")).await
    }
}

#[async_trait]
impl MutationService for Client {
    async fn get_mutations(&self, filter: Option<&DateFilter>) -> Result<Vec<Mutation>, AppError> {
        match filter {
            Some(f) => info!("Getting mutations with filter {}", f),
            None => info!("Getting all mutations"),
        }
        let mutations: Vec<Mutation> = self.get_paginated(MUTATION_PATH, filter).await?;
        debug!("Total mutations obtained: {}", mutations.len());
        Ok(mutations)
    }

    async fn get_mutations_between(
        &self,
        operator: Option<DateFilterOperator>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<Mutation>, AppError> {
        let filter = if start.is_some() || end.is_some() {
            Some(DateFilter::new(DEFAULT_DATE_PARAMETER, operator, start, end)?)
        } else {
            None
        };
        self.get_mutations(filter.as_ref()).await
    }

    async fn get_mutation(&self, id: i64) -> Result<Mutation, AppError> {
        debug!("Getting mutation {}", id);
        self.get(&format!("{MUTATION_PATH}/{id}")).await
    }

    async fn get_outstanding_invoices(&self) -> Result<Vec<OutstandingInvoice>, AppError> {
        info!("Getting outstanding invoices");
        self.get_items(OUTSTANDING_INVOICE_PATH).await
    }
}

#[async_trait]
impl RelationService for Client {
    async fn get_relations(&self) -> Result<Vec<Relation>, AppError> {
        info!("Getting relations");
        self.get_items(RELATION_PATH).await
    }

    async fn get_relation(&self, id: i64) -> Result<Relation, AppError> {
        debug!("Getting relation {}", id);
        self.get(&format!("{RELATION_PATH}/{id}")).await
    }
}
