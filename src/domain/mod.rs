mod line_item;
mod order_status;
mod product_ref;

pub mod requests;
pub mod responses;

pub use self::line_item::LineItem;
pub use self::order_status::OrderStatus;
pub use self::product_ref::{ProductKind, ProductRef};
