use crate::model::{Laptop, Mouse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct LaptopResponse {
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
    pub created_at: Option<String>,
}

impl From<Laptop> for LaptopResponse {
    fn from(value: Laptop) -> Self {
        LaptopResponse {
            id: value.id,
            brand: value.brand,
            model: value.model,
            processor: value.processor,
            ram_gb: value.ram_gb,
            storage_gb: value.storage_gb,
            graphics: value.graphics,
            screen_size: value.screen_size,
            price: value.price,
            stock_quantity: value.stock_quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MouseResponse {
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
    pub created_at: Option<String>,
}

impl From<Mouse> for MouseResponse {
    fn from(value: Mouse) -> Self {
        MouseResponse {
            id: value.id,
            brand: value.brand,
            model: value.model,
            mouse_type: value.mouse_type,
            connectivity: value.connectivity,
            dpi: value.dpi,
            buttons: value.buttons,
            rgb_lighting: value.rgb_lighting,
            weight_grams: value.weight_grams,
            price: value.price,
            stock_quantity: value.stock_quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
