use crate::{
    abstract_trait::{
        CatalogProduct, DynCatalogQueryRepository, DynOrderQueryRepository,
        InventoryRepositoryTrait, OrderCommandRepositoryTrait, OrderServiceTrait, ReserveOutcome,
        UnitOfWork,
    },
    domain::{
        LineItem, OrderStatus,
        requests::CreateOrderRequest,
        responses::{ApiResponse, OrderItemResponse, OrderResponse},
    },
    errors::ServiceError,
    model::{Order as OrderModel, OrderItem as OrderItemModel},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Orchestrates order creation and cancellation: validates line items
/// against the catalog, reserves stock per item inside a single unit of
/// work, persists the aggregate and reverses reservations on owner
/// cancellation. All collaborators are constructor-injected so the whole
/// workflow runs unchanged against in-memory fakes.
pub struct OrderService<U: UnitOfWork> {
    catalog: DynCatalogQueryRepository,
    inventory: Arc<dyn InventoryRepositoryTrait<U::Tx>>,
    command: Arc<dyn OrderCommandRepositoryTrait<U::Tx>>,
    query: DynOrderQueryRepository,
    uow: Arc<U>,
}

pub struct OrderServiceDeps<U: UnitOfWork> {
    pub catalog: DynCatalogQueryRepository,
    pub inventory: Arc<dyn InventoryRepositoryTrait<U::Tx>>,
    pub command: Arc<dyn OrderCommandRepositoryTrait<U::Tx>>,
    pub query: DynOrderQueryRepository,
    pub uow: Arc<U>,
}

impl<U: UnitOfWork> OrderService<U> {
    pub fn new(deps: OrderServiceDeps<U>) -> Self {
        let OrderServiceDeps {
            catalog,
            inventory,
            command,
            query,
            uow,
        } = deps;

        Self {
            catalog,
            inventory,
            command,
            query,
            uow,
        }
    }

    /// Rolls back an aborted unit of work. The original error is what the
    /// caller gets; a rollback failure is only logged.
    async fn abort(&self, tx: U::Tx) {
        if let Err(err) = self.uow.rollback(tx).await {
            error!("❌ Failed to roll back order transaction: {err:?}");
        }
    }

    fn item_response(item: &OrderItemModel, product_name: String) -> OrderItemResponse {
        let product_type = item
            .product()
            .map(|p| p.kind().as_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        OrderItemResponse {
            id: item.id,
            product_type,
            product_id: item.laptop_id.or(item.mouse_id).unwrap_or_default(),
            product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total_price: item.total_price(),
        }
    }

    fn order_response(order: &OrderModel, items: Vec<OrderItemResponse>) -> OrderResponse {
        OrderResponse {
            id: order.id,
            user_id: order.user_id,
            total_amount: order.total_amount,
            status: order.status.to_string(),
            items,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }

    /// Resolves display names for persisted items; products deleted from
    /// the catalog after the fact degrade to an "Unknown" label.
    async fn shape_items(
        &self,
        items: &[OrderItemModel],
    ) -> Result<Vec<OrderItemResponse>, ServiceError> {
        let mut responses = Vec::with_capacity(items.len());

        for item in items {
            let name = match item.product() {
                Some(product) => match self.catalog.find_product(product).await? {
                    Some(found) => found.name,
                    None => format!("Unknown {}", product.kind().as_str()),
                },
                None => "Unknown Product".to_string(),
            };
            responses.push(Self::item_response(item, name));
        }

        Ok(responses)
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> OrderServiceTrait for OrderService<U> {
    async fn create_order(
        &self,
        user_id: i64,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Creating order for user {user_id} with {} item(s)",
            req.items.len()
        );

        if req.items.is_empty() {
            return Err(ServiceError::EmptyOrder);
        }

        // Validate every line and resolve its product before touching any
        // stock, so validation failures never leave side effects behind.
        let mut lines: Vec<(LineItem, CatalogProduct)> = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let line = LineItem::try_from_request(item)?;

            let product = self
                .catalog
                .find_product(line.product)
                .await?
                .ok_or(ServiceError::ProductNotFound(line.product))?;

            if line.quantity > product.stock {
                return Err(ServiceError::InsufficientStock {
                    product: line.product,
                    requested: line.quantity,
                    available: product.stock,
                });
            }

            lines.push((line, product));
        }

        // Every line total fits by construction; the sum still has to be
        // guarded.
        let mut total_amount: i64 = 0;
        for (line, _) in &lines {
            total_amount = total_amount.checked_add(line.total_price()).ok_or_else(|| {
                ServiceError::InvalidLineItem(
                    "order total exceeds the representable amount".to_string(),
                )
            })?;
        }

        // One atomic unit: every reservation plus the order rows. A
        // reservation that fails here (stock moved since the check above)
        // aborts the whole unit, undoing the reservations already made.
        let mut tx = self.uow.begin().await?;

        for (line, _) in &lines {
            match self.inventory.reserve(&mut tx, line.product, line.quantity).await {
                Ok(ReserveOutcome::Reserved { .. }) => {}
                Ok(ReserveOutcome::Insufficient { available }) => {
                    error!(
                        "❌ Stock raced for {}: requested {}, available {available}",
                        line.product, line.quantity
                    );
                    self.abort(tx).await;
                    return Err(ServiceError::InsufficientStock {
                        product: line.product,
                        requested: line.quantity,
                        available,
                    });
                }
                Ok(ReserveOutcome::NotFound) => {
                    self.abort(tx).await;
                    return Err(ServiceError::ProductNotFound(line.product));
                }
                Err(err) => {
                    self.abort(tx).await;
                    return Err(ServiceError::Repo(err));
                }
            }
        }

        let order = match self.command.insert_order(&mut tx, user_id, total_amount).await {
            Ok(order) => order,
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };

        let line_items: Vec<LineItem> = lines.iter().map(|(line, _)| *line).collect();
        let rows = match self.command.insert_items(&mut tx, order.id, &line_items).await {
            Ok(rows) => rows,
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };

        self.uow.commit(tx).await?;

        info!(
            "✅ Order ID {} created for user {user_id} (total {})",
            order.id, order.total_amount
        );

        let items = rows
            .iter()
            .zip(lines.iter())
            .map(|(row, (_, product))| Self::item_response(row, product.name.clone()))
            .collect();

        Ok(ApiResponse::success(
            "Order created successfully",
            Self::order_response(&order, items),
        ))
    }

    async fn find_user_orders(
        &self,
        user_id: i64,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.query.find_by_user(user_id).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in &orders {
            let items = self.query.find_items_by_order(order.id).await?;
            let items = self.shape_items(&items).await?;
            responses.push(Self::order_response(order, items));
        }

        Ok(ApiResponse::success("Orders fetched successfully", responses))
    }

    async fn find_order(
        &self,
        order_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await?
            .ok_or(ServiceError::OrderNotFound)?;

        if order.user_id != user_id {
            return Err(ServiceError::Unauthorized);
        }

        let items = self.query.find_items_by_order(order.id).await?;
        let items = self.shape_items(&items).await?;

        Ok(ApiResponse::success(
            "Order fetched successfully",
            Self::order_response(&order, items),
        ))
    }

    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order ID {order_id} status to {status}");

        // Administrative transition: status and timestamp only, stock is
        // never touched here. The transition check runs on the locked row
        // so two concurrent updates cannot both apply the same step.
        let mut tx = self.uow.begin().await?;

        let order = match self.command.find_for_update(&mut tx, order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.abort(tx).await;
                return Err(ServiceError::OrderNotFound);
            }
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };

        if !order.status.can_transition_to(status) {
            self.abort(tx).await;
            return Err(ServiceError::InvalidStatusTransition {
                from: order.status,
                to: status,
            });
        }

        let updated = match self.command.update_status(&mut tx, order_id, status).await {
            Ok(updated) => updated,
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };
        self.uow.commit(tx).await?;

        let items = self.query.find_items_by_order(order_id).await?;
        let items = self.shape_items(&items).await?;

        Ok(ApiResponse::success(
            "Order status updated successfully",
            Self::order_response(&updated, items),
        ))
    }

    async fn delete_order(
        &self,
        order_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Cancelling order ID {order_id} for user {user_id}");

        // Releasing every line and removing the aggregate is one atomic
        // unit, mirroring creation. Ownership and status are checked on
        // the locked row, so a concurrent cancellation of the same order
        // cannot restore stock twice. An order owned by someone else is
        // reported exactly like a missing one.
        let mut tx = self.uow.begin().await?;

        let order = match self.command.find_for_update(&mut tx, order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.abort(tx).await;
                return Err(ServiceError::OrderNotFound);
            }
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };

        if order.user_id != user_id {
            self.abort(tx).await;
            return Err(ServiceError::OrderNotFound);
        }

        if order.status != OrderStatus::Pending {
            self.abort(tx).await;
            return Err(ServiceError::InvalidStatusTransition {
                from: order.status,
                to: OrderStatus::Cancelled,
            });
        }

        let items = match self.command.find_items(&mut tx, order_id).await {
            Ok(items) => items,
            Err(err) => {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        };

        for item in &items {
            let product = match item.product() {
                Some(product) => product,
                None => {
                    self.abort(tx).await;
                    return Err(ServiceError::Internal(format!(
                        "order item {} references no product",
                        item.id
                    )));
                }
            };

            if let Err(err) = self.inventory.release(&mut tx, product, item.quantity).await {
                self.abort(tx).await;
                return Err(ServiceError::Repo(err));
            }
        }

        if let Err(err) = self.command.delete_items(&mut tx, order_id).await {
            self.abort(tx).await;
            return Err(ServiceError::Repo(err));
        }

        if let Err(err) = self.command.delete_order(&mut tx, order_id).await {
            self.abort(tx).await;
            return Err(ServiceError::Repo(err));
        }

        self.uow.commit(tx).await?;

        info!("✅ Order ID {order_id} cancelled and stock restored");

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::CatalogQueryRepositoryTrait,
        domain::{ProductRef, requests::CreateOrderItemRequest},
        errors::RepositoryError,
    };
    use chrono::Utc;
    use std::collections::HashMap;
    use tokio::sync::{Mutex, OwnedMutexGuard};

    // In-memory stand-ins for the Postgres store. A transaction holds the
    // store lock from begin to commit/rollback, which gives the same
    // serialized check-and-decrement behaviour the conditional UPDATE
    // provides in Postgres.

    #[derive(Clone, Default)]
    struct MemState {
        products: HashMap<ProductRef, (String, i64, i32)>, // name, price, stock
        orders: HashMap<i64, OrderModel>,
        items: HashMap<i64, Vec<OrderItemModel>>,
        next_order_id: i64,
        next_item_id: i64,
    }

    struct MemTx {
        guard: OwnedMutexGuard<MemState>,
        snapshot: MemState,
    }

    struct MemStore {
        state: Arc<Mutex<MemState>>,
    }

    #[async_trait]
    impl UnitOfWork for MemStore {
        type Tx = MemTx;

        async fn begin(&self) -> Result<MemTx, RepositoryError> {
            let guard = self.state.clone().lock_owned().await;
            let snapshot = guard.clone();
            Ok(MemTx { guard, snapshot })
        }

        async fn commit(&self, tx: MemTx) -> Result<(), RepositoryError> {
            drop(tx);
            Ok(())
        }

        async fn rollback(&self, mut tx: MemTx) -> Result<(), RepositoryError> {
            *tx.guard = tx.snapshot;
            Ok(())
        }
    }

    struct MemCatalog {
        state: Arc<Mutex<MemState>>,
    }

    #[async_trait]
    impl CatalogQueryRepositoryTrait for MemCatalog {
        async fn find_product(
            &self,
            product: ProductRef,
        ) -> Result<Option<CatalogProduct>, RepositoryError> {
            let state = self.state.lock().await;
            Ok(state
                .products
                .get(&product)
                .map(|(name, price, stock)| CatalogProduct {
                    product,
                    name: name.clone(),
                    price: *price,
                    stock: *stock,
                }))
        }

        async fn stock_of(&self, product: ProductRef) -> Result<Option<i32>, RepositoryError> {
            let state = self.state.lock().await;
            Ok(state.products.get(&product).map(|(_, _, stock)| *stock))
        }
    }

    struct MemInventory;

    #[async_trait]
    impl InventoryRepositoryTrait<MemTx> for MemInventory {
        async fn reserve(
            &self,
            tx: &mut MemTx,
            product: ProductRef,
            quantity: i32,
        ) -> Result<ReserveOutcome, RepositoryError> {
            match tx.guard.products.get_mut(&product) {
                None => Ok(ReserveOutcome::NotFound),
                Some((_, _, stock)) if *stock < quantity => Ok(ReserveOutcome::Insufficient {
                    available: *stock,
                }),
                Some((_, _, stock)) => {
                    *stock -= quantity;
                    Ok(ReserveOutcome::Reserved { new_stock: *stock })
                }
            }
        }

        async fn release(
            &self,
            tx: &mut MemTx,
            product: ProductRef,
            quantity: i32,
        ) -> Result<(), RepositoryError> {
            match tx.guard.products.get_mut(&product) {
                None => Err(RepositoryError::NotFound),
                Some((_, _, stock)) => {
                    *stock += quantity;
                    Ok(())
                }
            }
        }
    }

    struct MemOrderCommand;

    #[async_trait]
    impl OrderCommandRepositoryTrait<MemTx> for MemOrderCommand {
        async fn find_for_update(
            &self,
            tx: &mut MemTx,
            order_id: i64,
        ) -> Result<Option<OrderModel>, RepositoryError> {
            Ok(tx.guard.orders.get(&order_id).cloned())
        }

        async fn find_items(
            &self,
            tx: &mut MemTx,
            order_id: i64,
        ) -> Result<Vec<OrderItemModel>, RepositoryError> {
            Ok(tx.guard.items.get(&order_id).cloned().unwrap_or_default())
        }

        async fn insert_order(
            &self,
            tx: &mut MemTx,
            user_id: i64,
            total_amount: i64,
        ) -> Result<OrderModel, RepositoryError> {
            tx.guard.next_order_id += 1;
            let now = Utc::now().naive_utc();
            let order = OrderModel {
                id: tx.guard.next_order_id,
                user_id,
                total_amount,
                status: OrderStatus::Pending,
                created_at: Some(now),
                updated_at: Some(now),
            };
            tx.guard.orders.insert(order.id, order.clone());
            Ok(order)
        }

        async fn insert_items(
            &self,
            tx: &mut MemTx,
            order_id: i64,
            items: &[LineItem],
        ) -> Result<Vec<OrderItemModel>, RepositoryError> {
            let mut rows = Vec::with_capacity(items.len());
            for line in items {
                tx.guard.next_item_id += 1;
                let (laptop_id, mouse_id) = line.product.into_columns();
                rows.push(OrderItemModel {
                    id: tx.guard.next_item_id,
                    order_id,
                    laptop_id,
                    mouse_id,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                });
            }
            tx.guard.items.insert(order_id, rows.clone());
            Ok(rows)
        }

        async fn update_status(
            &self,
            tx: &mut MemTx,
            order_id: i64,
            status: OrderStatus,
        ) -> Result<OrderModel, RepositoryError> {
            let order = tx
                .guard
                .orders
                .get_mut(&order_id)
                .ok_or(RepositoryError::NotFound)?;
            order.status = status;
            order.updated_at = Some(Utc::now().naive_utc());
            Ok(order.clone())
        }

        async fn delete_items(&self, tx: &mut MemTx, order_id: i64) -> Result<(), RepositoryError> {
            tx.guard.items.remove(&order_id);
            Ok(())
        }

        async fn delete_order(&self, tx: &mut MemTx, order_id: i64) -> Result<(), RepositoryError> {
            tx.guard.orders.remove(&order_id);
            Ok(())
        }
    }

    struct MemOrderQuery {
        state: Arc<Mutex<MemState>>,
    }

    #[async_trait]
    impl crate::abstract_trait::OrderQueryRepositoryTrait for MemOrderQuery {
        async fn find_by_id(
            &self,
            order_id: i64,
        ) -> Result<Option<OrderModel>, RepositoryError> {
            Ok(self.state.lock().await.orders.get(&order_id).cloned())
        }

        async fn find_by_user(&self, user_id: i64) -> Result<Vec<OrderModel>, RepositoryError> {
            let state = self.state.lock().await;
            let mut orders: Vec<OrderModel> = state
                .orders
                .values()
                .filter(|order| order.user_id == user_id)
                .cloned()
                .collect();
            orders.sort_by_key(|order| order.id);
            Ok(orders)
        }

        async fn find_items_by_order(
            &self,
            order_id: i64,
        ) -> Result<Vec<OrderItemModel>, RepositoryError> {
            let state = self.state.lock().await;
            Ok(state.items.get(&order_id).cloned().unwrap_or_default())
        }
    }

    const LAPTOP: ProductRef = ProductRef::Laptop(1);
    const MOUSE: ProductRef = ProductRef::Mouse(1);

    fn service() -> (Arc<OrderService<MemStore>>, Arc<Mutex<MemState>>) {
        let mut state = MemState::default();
        state
            .products
            .insert(LAPTOP, ("Dell XPS 13".to_string(), 99900, 5));
        state
            .products
            .insert(MOUSE, ("Logitech MX Master 3".to_string(), 9900, 10));

        let state = Arc::new(Mutex::new(state));

        let service = OrderService::new(OrderServiceDeps {
            catalog: Arc::new(MemCatalog {
                state: state.clone(),
            }),
            inventory: Arc::new(MemInventory),
            command: Arc::new(MemOrderCommand),
            query: Arc::new(MemOrderQuery {
                state: state.clone(),
            }),
            uow: Arc::new(MemStore {
                state: state.clone(),
            }),
        });

        (Arc::new(service), state)
    }

    fn laptop_item(quantity: i32, unit_price: i64) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            laptop_id: Some(1),
            mouse_id: None,
            quantity,
            unit_price,
        }
    }

    fn mouse_item(quantity: i32, unit_price: i64) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            laptop_id: None,
            mouse_id: Some(1),
            quantity,
            unit_price,
        }
    }

    async fn stock_of(state: &Arc<Mutex<MemState>>, product: ProductRef) -> i32 {
        state.lock().await.products.get(&product).unwrap().2
    }

    #[tokio::test]
    async fn create_order_totals_and_decrements_stock() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(2, 99900)],
        };
        let response = service.create_order(7, &req).await.unwrap();
        let order = response.data;

        assert_eq!(order.user_id, 7);
        assert_eq!(order.total_amount, 199800);
        assert_eq!(order.status, "PENDING");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_name, "Dell XPS 13");
        assert_eq!(order.items[0].product_type, "Laptop");
        assert_eq!(order.items[0].total_price, 199800);

        assert_eq!(stock_of(&state, LAPTOP).await, 3);
        assert_eq!(stock_of(&state, MOUSE).await, 10);
    }

    #[tokio::test]
    async fn create_order_sums_across_heterogeneous_lines() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900), mouse_item(3, 9900)],
        };
        let order = service.create_order(1, &req).await.unwrap().data;

        assert_eq!(order.total_amount, 99900 + 3 * 9900);
        assert_eq!(order.items[0].product_type, "Laptop");
        assert_eq!(order.items[1].product_type, "Mouse");
        assert_eq!(stock_of(&state, LAPTOP).await, 4);
        assert_eq!(stock_of(&state, MOUSE).await, 7);
    }

    #[tokio::test]
    async fn empty_order_is_rejected() {
        let (service, state) = service();

        let err = service
            .create_order(1, &CreateOrderRequest { items: vec![] })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::EmptyOrder));
        assert_eq!(stock_of(&state, LAPTOP).await, 5);
    }

    #[tokio::test]
    async fn line_naming_both_kinds_produces_no_order() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![CreateOrderItemRequest {
                laptop_id: Some(1),
                mouse_id: Some(1),
                quantity: 1,
                unit_price: 100,
            }],
        };
        let err = service.create_order(1, &req).await.unwrap_err();

        assert!(matches!(err, ServiceError::InvalidLineItem(_)));
        assert!(state.lock().await.orders.is_empty());
        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert_eq!(stock_of(&state, MOUSE).await, 10);
    }

    #[tokio::test]
    async fn unknown_product_is_reported() {
        let (service, _) = service();

        let req = CreateOrderRequest {
            items: vec![CreateOrderItemRequest {
                laptop_id: Some(99),
                mouse_id: None,
                quantity: 1,
                unit_price: 100,
            }],
        };
        let err = service.create_order(1, &req).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::ProductNotFound(ProductRef::Laptop(99))
        ));
    }

    #[tokio::test]
    async fn oversized_line_leaves_every_stock_untouched() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![mouse_item(2, 9900), laptop_item(6, 99900)],
        };
        let err = service.create_order(1, &req).await.unwrap_err();

        match err {
            ServiceError::InsufficientStock {
                product,
                requested,
                available,
            } => {
                assert_eq!(product, LAPTOP);
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // The first line passed validation, yet nothing was reserved.
        assert_eq!(stock_of(&state, MOUSE).await, 10);
        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert!(state.lock().await.orders.is_empty());
    }

    #[tokio::test]
    async fn reservation_race_rolls_back_earlier_reservations() {
        let (service, state) = service();

        // Both lines individually pass the stock check (5 in stock), but
        // together they oversell, so the second reservation fails inside
        // the transaction and the first must be undone.
        let req = CreateOrderRequest {
            items: vec![laptop_item(3, 99900), laptop_item(3, 99900)],
        };
        let err = service.create_order(1, &req).await.unwrap_err();

        match err {
            ServiceError::InsufficientStock {
                product,
                requested,
                available,
            } => {
                assert_eq!(product, LAPTOP);
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert!(state.lock().await.orders.is_empty());
        assert!(state.lock().await.items.is_empty());
    }

    #[tokio::test]
    async fn overflowing_totals_are_rejected_without_side_effects() {
        let (service, state) = service();

        // A single line whose total would not fit.
        let req = CreateOrderRequest {
            items: vec![laptop_item(3, i64::MAX / 2)],
        };
        let err = service.create_order(1, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidLineItem(_)));

        // Two lines that fit individually but whose sum does not.
        let req = CreateOrderRequest {
            items: vec![laptop_item(1, i64::MAX - 1), mouse_item(1, i64::MAX - 1)],
        };
        let err = service.create_order(1, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidLineItem(_)));

        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert_eq!(stock_of(&state, MOUSE).await, 10);
        assert!(state.lock().await.orders.is_empty());
    }

    #[tokio::test]
    async fn cancelling_pending_order_restores_stock_and_removes_rows() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(2, 99900), mouse_item(1, 9900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;
        assert_eq!(stock_of(&state, LAPTOP).await, 3);
        assert_eq!(stock_of(&state, MOUSE).await, 9);

        service.delete_order(order.id, 4).await.unwrap();

        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert_eq!(stock_of(&state, MOUSE).await, 10);
        assert!(state.lock().await.orders.is_empty());
        assert!(state.lock().await.items.is_empty());
    }

    #[tokio::test]
    async fn cancelling_non_pending_order_fails_and_changes_nothing() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;

        service
            .update_order_status(order.id, OrderStatus::Confirmed)
            .await
            .unwrap();

        let err = service.delete_order(order.id, 4).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidStatusTransition {
                from: OrderStatus::Confirmed,
                to: OrderStatus::Cancelled,
            }
        ));

        assert_eq!(stock_of(&state, LAPTOP).await, 4);
        assert_eq!(state.lock().await.orders.len(), 1);
    }

    #[tokio::test]
    async fn deletion_of_foreign_or_absent_order_looks_identical() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;

        // Someone else's order must not be distinguishable from a missing
        // one.
        let err = service.delete_order(order.id, 5).await.unwrap_err();
        assert!(matches!(err, ServiceError::OrderNotFound));

        let err = service.delete_order(order.id + 100, 4).await.unwrap_err();
        assert!(matches!(err, ServiceError::OrderNotFound));

        assert_eq!(stock_of(&state, LAPTOP).await, 4);
        assert_eq!(state.lock().await.orders.len(), 1);
    }

    #[tokio::test]
    async fn status_updates_follow_the_lifecycle_without_stock_effects() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;

        let err = service
            .update_order_status(order.id, OrderStatus::Delivered)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));

        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            let updated = service.update_order_status(order.id, status).await.unwrap();
            assert_eq!(updated.data.status, status.to_string());
        }

        // Cancelling via admin update is terminal-blocked now, and stock
        // was never touched along the way.
        let err = service
            .update_order_status(order.id, OrderStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));
        assert_eq!(stock_of(&state, LAPTOP).await, 4);
    }

    #[tokio::test]
    async fn reads_enforce_ownership_and_return_lines_in_order() {
        let (service, _) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900), mouse_item(2, 9900)],
        };
        let created = service.create_order(4, &req).await.unwrap().data;

        let fetched = service.find_order(created.id, 4).await.unwrap().data;
        assert_eq!(fetched.items.len(), 2);
        assert_eq!(fetched.items[0].product_type, "Laptop");
        assert_eq!(fetched.items[1].product_type, "Mouse");
        assert_eq!(fetched.total_amount, created.total_amount);

        assert!(matches!(
            service.find_order(created.id, 5).await.unwrap_err(),
            ServiceError::Unauthorized
        ));
        assert!(matches!(
            service.find_order(999, 4).await.unwrap_err(),
            ServiceError::OrderNotFound
        ));

        let listed = service.find_user_orders(4).await.unwrap().data;
        assert_eq!(listed.len(), 1);
        assert!(service.find_user_orders(5).await.unwrap().data.is_empty());
    }

    #[tokio::test]
    async fn concurrent_cancellations_restore_stock_once() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(2, 99900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;
        assert_eq!(stock_of(&state, LAPTOP).await, 3);

        let first = {
            let service = service.clone();
            let id = order.id;
            tokio::spawn(async move { service.delete_order(id, 4).await })
        };
        let second = {
            let service = service.clone();
            let id = order.id;
            tokio::spawn(async move { service.delete_order(id, 4).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let not_found = results
            .iter()
            .filter(|r| matches!(r, Err(ServiceError::OrderNotFound)))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(not_found, 1);
        // Restored exactly once, not doubled.
        assert_eq!(stock_of(&state, LAPTOP).await, 5);
        assert!(state.lock().await.orders.is_empty());
    }

    #[tokio::test]
    async fn concurrent_status_updates_apply_a_step_once() {
        let (service, state) = service();

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900)],
        };
        let order = service.create_order(4, &req).await.unwrap().data;

        let first = {
            let service = service.clone();
            let id = order.id;
            tokio::spawn(async move { service.update_order_status(id, OrderStatus::Confirmed).await })
        };
        let second = {
            let service = service.clone();
            let id = order.id;
            tokio::spawn(async move { service.update_order_status(id, OrderStatus::Confirmed).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let rejected = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    Err(ServiceError::InvalidStatusTransition {
                        from: OrderStatus::Confirmed,
                        to: OrderStatus::Confirmed,
                    })
                )
            })
            .count();

        assert_eq!(successes, 1);
        assert_eq!(rejected, 1);
        assert_eq!(
            state.lock().await.orders.get(&order.id).unwrap().status,
            OrderStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn concurrent_orders_cannot_jointly_oversell() {
        let (service, state) = service();

        // Leave exactly one laptop in stock.
        state.lock().await.products.get_mut(&LAPTOP).unwrap().2 = 1;

        let req = CreateOrderRequest {
            items: vec![laptop_item(1, 99900)],
        };

        let first = {
            let service = service.clone();
            let req = req.clone();
            tokio::spawn(async move { service.create_order(1, &req).await })
        };
        let second = {
            let service = service.clone();
            let req = req.clone();
            tokio::spawn(async move { service.create_order(2, &req).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let insufficient = results
            .iter()
            .filter(|r| {
                matches!(
                    r,
                    Err(ServiceError::InsufficientStock { available: 0, .. })
                )
            })
            .count();

        assert_eq!(successes, 1);
        assert_eq!(insufficient, 1);
        assert_eq!(stock_of(&state, LAPTOP).await, 0);
        assert_eq!(state.lock().await.orders.len(), 1);
    }
}
