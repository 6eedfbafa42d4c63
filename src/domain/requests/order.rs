use crate::domain::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1))]
    pub items: Vec<CreateOrderItemRequest>,
}

/// One raw line of a proposed order. Exactly one of `laptop_id` / `mouse_id`
/// must be set; the orchestrator rejects everything else.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderItemRequest {
    pub laptop_id: Option<i64>,
    pub mouse_id: Option<i64>,
    pub quantity: i32,
    /// Unit price in cents, snapshotted onto the order item.
    pub unit_price: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
