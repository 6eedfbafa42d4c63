mod api;
mod order;
mod product;
mod user;

pub use self::api::ApiResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::product::{LaptopResponse, MouseResponse};
pub use self::user::{TokenResponse, UserResponse};
