mod laptop;
mod mouse;
mod order;
mod user;

pub use self::laptop::Laptop;
pub use self::mouse::Mouse;
pub use self::order::{Order, OrderItem};
pub use self::user::User;
