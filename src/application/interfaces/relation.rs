use crate::error::AppError;
use crate::presentation::relation::Relation;
use async_trait::async_trait;

/// Interface for the relation endpoints
#[async_trait]
pub trait RelationService: Send + Sync {
    /// Gets all relations
    async fn get_relations(&self) -> Result<Vec<Relation>, AppError>;

    /// Gets a single relation by its id
    async fn get_relation(&self, id: i64) -> Result<Relation, AppError>;
}
