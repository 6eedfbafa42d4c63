use crate::{
    domain::{
        LineItem, OrderStatus,
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItem as OrderItemModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

/// Order mutations, always inside the orchestrator's unit of work.
#[async_trait]
pub trait OrderCommandRepositoryTrait<Tx: Send>: Send + Sync {
    /// Fetches an order with its row locked for the rest of the unit of
    /// work, so status checks and the mutations that follow see one
    /// consistent row even under concurrent calls.
    async fn find_for_update(
        &self,
        tx: &mut Tx,
        order_id: i64,
    ) -> Result<Option<OrderModel>, RepositoryError>;

    /// Items of an order, read through the unit of work.
    async fn find_items(
        &self,
        tx: &mut Tx,
        order_id: i64,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;

    async fn insert_order(
        &self,
        tx: &mut Tx,
        user_id: i64,
        total_amount: i64,
    ) -> Result<OrderModel, RepositoryError>;

    async fn insert_items(
        &self,
        tx: &mut Tx,
        order_id: i64,
        items: &[LineItem],
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;

    async fn update_status(
        &self,
        tx: &mut Tx,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<OrderModel, RepositoryError>;

    async fn delete_items(&self, tx: &mut Tx, order_id: i64) -> Result<(), RepositoryError>;

    async fn delete_order(&self, tx: &mut Tx, order_id: i64) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, order_id: i64) -> Result<Option<OrderModel>, RepositoryError>;

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<OrderModel>, RepositoryError>;

    async fn find_items_by_order(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn create_order(
        &self,
        user_id: i64,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn find_user_orders(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;

    async fn find_order(
        &self,
        order_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn delete_order(
        &self,
        order_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
