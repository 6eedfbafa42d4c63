use crate::{domain::ProductRef, errors::RepositoryError};
use async_trait::async_trait;

/// Result of a reservation attempt against a single product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    Reserved { new_stock: i32 },
    Insufficient { available: i32 },
    NotFound,
}

/// The only component permitted to mutate stock. Both operations act on a
/// single product row inside the transaction handle they are given; the
/// orchestrator supplies multi-item atomicity.
#[async_trait]
pub trait InventoryRepositoryTrait<Tx: Send>: Send + Sync {
    /// Decrements stock by `quantity` if and only if the resulting stock
    /// stays non-negative. Check and decrement are one atomic operation on
    /// the row, so a stale earlier read surfaces as `Insufficient` rather
    /// than driving stock negative.
    async fn reserve(
        &self,
        tx: &mut Tx,
        product: ProductRef,
        quantity: i32,
    ) -> Result<ReserveOutcome, RepositoryError>;

    /// Increments stock by `quantity`; the exact inverse of a prior
    /// successful [`reserve`](Self::reserve) with the same quantity.
    async fn release(
        &self,
        tx: &mut Tx,
        product: ProductRef,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
}
