use crate::{
    abstract_trait::{
        DynAuthService, DynHashing, DynJwtService, DynLaptopService, DynMouseService,
        DynOrderService,
    },
    config::{ConnectionPool, Hashing},
    repository::{
        CatalogQueryRepository, InventoryRepository, LaptopQueryRepository, MouseQueryRepository,
        OrderCommandRepository, OrderQueryRepository, PgUnitOfWork, UserRepository,
    },
    service::{AuthService, LaptopService, MouseService, OrderService, OrderServiceDeps},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub laptop_service: DynLaptopService,
    pub mouse_service: DynMouseService,
    pub order_service: DynOrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("laptop_service", &"LaptopService")
            .field("mouse_service", &"MouseService")
            .field("order_service", &"OrderService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let user_repository = Arc::new(UserRepository::new(pool.clone()));
        let auth_service =
            Arc::new(AuthService::new(user_repository, hashing, jwt)) as DynAuthService;

        let laptop_repository = Arc::new(LaptopQueryRepository::new(pool.clone()));
        let laptop_service = Arc::new(LaptopService::new(laptop_repository)) as DynLaptopService;

        let mouse_repository = Arc::new(MouseQueryRepository::new(pool.clone()));
        let mouse_service = Arc::new(MouseService::new(mouse_repository)) as DynMouseService;

        let order_service = Arc::new(OrderService::new(OrderServiceDeps {
            catalog: Arc::new(CatalogQueryRepository::new(pool.clone())),
            inventory: Arc::new(InventoryRepository::new()),
            command: Arc::new(OrderCommandRepository::new()),
            query: Arc::new(OrderQueryRepository::new(pool.clone())),
            uow: Arc::new(PgUnitOfWork::new(pool)),
        })) as DynOrderService;

        Self {
            auth_service,
            laptop_service,
            mouse_service,
            order_service,
        }
    }
}
