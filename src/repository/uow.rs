use crate::{
    abstract_trait::UnitOfWork,
    config::{ConnectionPool, PgTx},
    errors::RepositoryError,
};
use async_trait::async_trait;

/// Postgres-backed unit of work: one transaction per order operation.
pub struct PgUnitOfWork {
    db: ConnectionPool,
}

impl PgUnitOfWork {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    type Tx = PgTx;

    async fn begin(&self) -> Result<Self::Tx, RepositoryError> {
        let tx = self.db.begin().await.map_err(RepositoryError::from)?;
        Ok(tx)
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), RepositoryError> {
        tx.commit().await.map_err(RepositoryError::from)
    }

    async fn rollback(&self, tx: Self::Tx) -> Result<(), RepositoryError> {
        tx.rollback().await.map_err(RepositoryError::from)
    }
}
