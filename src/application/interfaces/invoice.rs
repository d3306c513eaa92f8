use crate::error::AppError;
use crate::presentation::invoice::Invoice;
use async_trait::async_trait;

/// Interface for the invoice endpoints
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// Gets all invoices
    async fn get_invoices(&self) -> Result<Vec<Invoice>, AppError>;

    /// Gets a single invoice by its id
    async fn get_invoice(&self, id: i64) -> Result<Invoice, AppError>;
}
