use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i64,
    pub user_id: i64,
    /// Sum of the line totals in cents, fixed at creation time.
    pub total_amount: i64,
    pub status: String,
    pub items: Vec<OrderItemResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_type: String,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_price: i64,
}
