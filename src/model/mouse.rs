use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mouse {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub mouse_type: String,
    pub connectivity: String,
    pub dpi: i32,
    pub buttons: i32,
    pub rgb_lighting: bool,
    pub weight_grams: i32,
    pub price: i64,
    pub stock_quantity: i32,
    pub created_at: Option<NaiveDateTime>,
}

impl Mouse {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
