mod auth;
mod order;
mod product;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::order::{CreateOrderItemRequest, CreateOrderRequest, UpdateOrderStatusRequest};
pub use self::product::SearchProductsQuery;
