mod auth;
mod catalog;
mod hashing;
mod inventory;
mod jwt;
mod laptop;
mod mouse;
mod order;
mod uow;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::catalog::{CatalogProduct, CatalogQueryRepositoryTrait, DynCatalogQueryRepository};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::inventory::{InventoryRepositoryTrait, ReserveOutcome};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::laptop::{
    DynLaptopQueryRepository, DynLaptopService, LaptopQueryRepositoryTrait, LaptopServiceTrait,
};
pub use self::mouse::{
    DynMouseQueryRepository, DynMouseService, MouseQueryRepositoryTrait, MouseServiceTrait,
};
pub use self::order::{
    DynOrderQueryRepository, DynOrderService, OrderCommandRepositoryTrait,
    OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::uow::UnitOfWork;
pub use self::user::{DynUserRepository, UserRepositoryTrait};
