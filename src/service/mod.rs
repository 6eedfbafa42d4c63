mod auth;
mod laptop;
mod mouse;
mod order;

pub use self::auth::AuthService;
pub use self::laptop::LaptopService;
pub use self::mouse::MouseService;
pub use self::order::{OrderService, OrderServiceDeps};
