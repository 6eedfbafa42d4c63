use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel},
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, order_id: i64) -> Result<Option<OrderModel>, RepositoryError> {
        sqlx::query_as::<_, OrderModel>(
            "SELECT id, user_id, total_amount, status, created_at, updated_at \
             FROM orders WHERE id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order {order_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<OrderModel>, RepositoryError> {
        sqlx::query_as::<_, OrderModel>(
            "SELECT id, user_id, total_amount, status, created_at, updated_at \
             FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch orders of user {user_id}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_items_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        // PK ordering preserves the creation order of the lines.
        sqlx::query_as::<_, OrderItemModel>(
            "SELECT id, order_id, laptop_id, mouse_id, quantity, unit_price \
             FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items of order {order_id}: {err:?}");
            RepositoryError::from(err)
        })
    }
}
