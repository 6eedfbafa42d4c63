use crate::domain::{OrderStatus, ProductRef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Persisted line of an order. The two nullable FK columns are only ever
/// written from a [`ProductRef`], so exactly one of them is set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub laptop_id: Option<i64>,
    pub mouse_id: Option<i64>,
    pub quantity: i32,
    pub unit_price: i64,
}

impl OrderItem {
    pub fn product(&self) -> Option<ProductRef> {
        ProductRef::from_columns(self.laptop_id, self.mouse_id)
    }

    pub fn total_price(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }
}
