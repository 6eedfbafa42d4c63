use crate::{domain::ProductRef, errors::RepositoryError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCatalogQueryRepository = Arc<dyn CatalogQueryRepositoryTrait + Send + Sync>;

/// A catalog item resolved through a [`ProductRef`], regardless of which
/// of the two product tables it came from.
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    pub product: ProductRef,
    pub name: String,
    pub price: i64,
    pub stock: i32,
}

/// Read-only lookup over the two product kinds. No side effects; stock is
/// mutated exclusively through the inventory repository.
#[async_trait]
pub trait CatalogQueryRepositoryTrait {
    async fn find_product(
        &self,
        product: ProductRef,
    ) -> Result<Option<CatalogProduct>, RepositoryError>;

    async fn stock_of(&self, product: ProductRef) -> Result<Option<i32>, RepositoryError>;
}
