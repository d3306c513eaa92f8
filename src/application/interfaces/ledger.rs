use crate::error::AppError;
use crate::presentation::ledger::Ledger;
use async_trait::async_trait;

/// Interface for the ledger endpoints
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Gets all ledger accounts
    async fn get_ledgers(&self) -> Result<Vec<Ledger>, AppError>;

    /// Gets a single ledger account by its id
    async fn get_ledger(&self, id: i64) -> Result<Ledger, AppError>;
}
