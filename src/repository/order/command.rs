use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::PgTx,
    domain::{LineItem, OrderStatus},
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel},
};
use async_trait::async_trait;
use tracing::{error, info};

/// Order and order-item mutations. Every method runs on the transaction
/// handle supplied by the orchestrator.
pub struct OrderCommandRepository;

impl OrderCommandRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait<PgTx> for OrderCommandRepository {
    async fn find_for_update(
        &self,
        tx: &mut PgTx,
        order_id: i64,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT id, user_id, total_amount, status, created_at, updated_at
            FROM orders WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to lock order {order_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_items(
        &self,
        tx: &mut PgTx,
        order_id: i64,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        sqlx::query_as::<_, OrderItemModel>(
            "SELECT id, order_id, laptop_id, mouse_id, quantity, unit_price \
             FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn insert_order(
        &self,
        tx: &mut PgTx,
        user_id: i64,
        total_amount: i64,
    ) -> Result<OrderModel, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (user_id, total_amount, status, created_at, updated_at)
            VALUES ($1, $2, 'PENDING', current_timestamp, current_timestamp)
            RETURNING id, user_id, total_amount, status, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(total_amount)
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for user {user_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Created order ID {} for user {user_id}", order.id);
        Ok(order)
    }

    async fn insert_items(
        &self,
        tx: &mut PgTx,
        order_id: i64,
        items: &[LineItem],
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        let mut rows = Vec::with_capacity(items.len());

        for line in items {
            let (laptop_id, mouse_id) = line.product.into_columns();

            let row = sqlx::query_as::<_, OrderItemModel>(
                r#"
                INSERT INTO order_items (order_id, laptop_id, mouse_id, quantity, unit_price)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, order_id, laptop_id, mouse_id, quantity, unit_price
                "#,
            )
            .bind(order_id)
            .bind(laptop_id)
            .bind(mouse_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .fetch_one(&mut **tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to create item for order {order_id}: {err:?}");
                RepositoryError::from(err)
            })?;

            rows.push(row);
        }

        info!("✅ Created {} item(s) for order ID {order_id}", rows.len());
        Ok(rows)
    }

    async fn update_status(
        &self,
        tx: &mut PgTx,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = $2,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING id, user_id, total_amount, status, created_at, updated_at
            "#,
        )
        .bind(order_id)
        .bind(status)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update status of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order ID {order_id} status set to {status}");
        Ok(order)
    }

    async fn delete_items(&self, tx: &mut PgTx, order_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut **tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete items of order {order_id}: {err:?}");
                RepositoryError::from(err)
            })?;

        Ok(())
    }

    async fn delete_order(&self, tx: &mut PgTx, order_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&mut **tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {order_id}: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted order ID {order_id}");
        Ok(())
    }
}
