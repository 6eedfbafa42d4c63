use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Laptop {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub processor: String,
    pub ram_gb: i32,
    pub storage_gb: i32,
    pub graphics: String,
    pub screen_size: f64,
    pub price: i64,
    pub stock_quantity: i32,
    pub created_at: Option<NaiveDateTime>,
}

impl Laptop {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
