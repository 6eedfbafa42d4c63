use crate::errors::RepositoryError;
use async_trait::async_trait;

/// Explicit atomic unit of work. The orchestrator begins one, threads the
/// handle through every reservation and persistence call it makes, and
/// either commits the whole unit or rolls all of it back.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, RepositoryError>;
    async fn commit(&self, tx: Self::Tx) -> Result<(), RepositoryError>;
    async fn rollback(&self, tx: Self::Tx) -> Result<(), RepositoryError>;
}
