use crate::error::AppError;
use crate::presentation::cost_center::CostCenter;
use async_trait::async_trait;

/// Interface for the cost center endpoints
#[async_trait]
pub trait CostCenterService: Send + Sync {
    /// Gets all cost centers
    async fn get_cost_centers(&self) -> Result<Vec<CostCenter>, AppError>;

    /// Gets a single cost center by its id
    async fn get_cost_center(&self, id: i64) -> Result<CostCenter, AppError>;
}
