mod catalog;
mod inventory;
mod laptop;
mod mouse;
mod order;
mod uow;
mod user;

pub use self::catalog::CatalogQueryRepository;
pub use self::inventory::InventoryRepository;
pub use self::laptop::LaptopQueryRepository;
pub use self::mouse::MouseQueryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::uow::PgUnitOfWork;
pub use self::user::UserRepository;
