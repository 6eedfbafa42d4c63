use crate::{
    abstract_trait::{InventoryRepositoryTrait, ReserveOutcome},
    config::PgTx,
    domain::ProductRef,
    errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Stock mutation against the `laptops` / `mice` tables. The conditional
/// UPDATE makes check-and-decrement a single atomic statement per row, so
/// two concurrent reservations can never jointly oversell a product.
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn reserve_sql(product: ProductRef) -> &'static str {
    match product {
        ProductRef::Laptop(_) => {
            "UPDATE laptops SET stock_quantity = stock_quantity - $1 \
             WHERE id = $2 AND stock_quantity >= $1 RETURNING stock_quantity"
        }
        ProductRef::Mouse(_) => {
            "UPDATE mice SET stock_quantity = stock_quantity - $1 \
             WHERE id = $2 AND stock_quantity >= $1 RETURNING stock_quantity"
        }
    }
}

fn release_sql(product: ProductRef) -> &'static str {
    match product {
        ProductRef::Laptop(_) => {
            "UPDATE laptops SET stock_quantity = stock_quantity + $1 \
             WHERE id = $2 RETURNING stock_quantity"
        }
        ProductRef::Mouse(_) => {
            "UPDATE mice SET stock_quantity = stock_quantity + $1 \
             WHERE id = $2 RETURNING stock_quantity"
        }
    }
}

fn stock_sql(product: ProductRef) -> &'static str {
    match product {
        ProductRef::Laptop(_) => "SELECT stock_quantity FROM laptops WHERE id = $1",
        ProductRef::Mouse(_) => "SELECT stock_quantity FROM mice WHERE id = $1",
    }
}

#[async_trait]
impl InventoryRepositoryTrait<PgTx> for InventoryRepository {
    async fn reserve(
        &self,
        tx: &mut PgTx,
        product: ProductRef,
        quantity: i32,
    ) -> Result<ReserveOutcome, RepositoryError> {
        let updated = sqlx::query_scalar::<_, i32>(reserve_sql(product))
            .bind(quantity)
            .bind(product.id())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to reserve {quantity} of {product}: {err:?}");
                RepositoryError::from(err)
            })?;

        if let Some(new_stock) = updated {
            info!("✅ Reserved {quantity} of {product} (stock now {new_stock})");
            return Ok(ReserveOutcome::Reserved { new_stock });
        }

        // No row matched: either the product is gone or the stock guard
        // rejected the decrement. Distinguish the two for the caller.
        let available = sqlx::query_scalar::<_, i32>(stock_sql(product))
            .bind(product.id())
            .fetch_optional(&mut **tx)
            .await
            .map_err(RepositoryError::from)?;

        match available {
            Some(available) => {
                warn!(
                    "⚠️ Insufficient stock for {product}: requested {quantity}, available {available}"
                );
                Ok(ReserveOutcome::Insufficient { available })
            }
            None => Ok(ReserveOutcome::NotFound),
        }
    }

    async fn release(
        &self,
        tx: &mut PgTx,
        product: ProductRef,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let new_stock = sqlx::query_scalar::<_, i32>(release_sql(product))
            .bind(quantity)
            .bind(product.id())
            .fetch_optional(&mut **tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to release {quantity} of {product}: {err:?}");
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Released {quantity} of {product} (stock now {new_stock})");
        Ok(())
    }
}
