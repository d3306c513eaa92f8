use crate::error::AppError;
use crate::model::filter::{DateFilter, DateFilterOperator};
use crate::presentation::invoice::OutstandingInvoice;
use crate::presentation::mutation::Mutation;
use async_trait::async_trait;

/// Interface for the mutation endpoints
#[async_trait]
pub trait MutationService: Send + Sync {
    /// Gets every mutation matching the optional date filter, handling
    /// pagination automatically
    ///
    /// Pages are requested at offsets 0, limit, 2 * limit, ... until the
    /// server returns an empty page. A failing page aborts the whole call.
    ///
    /// # Arguments
    /// * `filter` - Optional date filter merged into every page request
    ///
    /// # Returns
    /// * All mutations, in server order
    async fn get_mutations(&self, filter: Option<&DateFilter>) -> Result<Vec<Mutation>, AppError>;

    /// Gets mutations filtered on the `date` parameter from loose arguments
    ///
    /// No filter is applied when both `start` and `end` are `None`;
    /// otherwise the usual filter validation applies, so a missing operator
    /// is an error.
    async fn get_mutations_between(
        &self,
        operator: Option<DateFilterOperator>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<Mutation>, AppError>;

    /// Gets a single mutation, including its rows
    async fn get_mutation(&self, id: i64) -> Result<Mutation, AppError>;

    /// Gets invoices that still have an open balance
    async fn get_outstanding_invoices(&self) -> Result<Vec<OutstandingInvoice>, AppError>;
}
