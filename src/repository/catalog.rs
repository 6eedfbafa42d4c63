use crate::{
    abstract_trait::{CatalogProduct, CatalogQueryRepositoryTrait},
    config::ConnectionPool,
    domain::ProductRef,
    errors::RepositoryError,
    model::{Laptop, Mouse},
};
use async_trait::async_trait;

/// Ref-based lookup across the two product tables, used by the order
/// orchestrator to resolve names, prices and current stock.
pub struct CatalogQueryRepository {
    db: ConnectionPool,
}

impl CatalogQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQueryRepositoryTrait for CatalogQueryRepository {
    async fn find_product(
        &self,
        product: ProductRef,
    ) -> Result<Option<CatalogProduct>, RepositoryError> {
        let found = match product {
            ProductRef::Laptop(id) => {
                sqlx::query_as::<_, Laptop>("SELECT * FROM laptops WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.db)
                    .await
                    .map_err(RepositoryError::from)?
                    .map(|laptop| CatalogProduct {
                        product,
                        name: laptop.display_name(),
                        price: laptop.price,
                        stock: laptop.stock_quantity,
                    })
            }
            ProductRef::Mouse(id) => {
                sqlx::query_as::<_, Mouse>("SELECT * FROM mice WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&self.db)
                    .await
                    .map_err(RepositoryError::from)?
                    .map(|mouse| CatalogProduct {
                        product,
                        name: mouse.display_name(),
                        price: mouse.price,
                        stock: mouse.stock_quantity,
                    })
            }
        };

        Ok(found)
    }

    async fn stock_of(&self, product: ProductRef) -> Result<Option<i32>, RepositoryError> {
        let sql = match product {
            ProductRef::Laptop(_) => "SELECT stock_quantity FROM laptops WHERE id = $1",
            ProductRef::Mouse(_) => "SELECT stock_quantity FROM mice WHERE id = $1",
        };

        sqlx::query_scalar::<_, i32>(sql)
            .bind(product.id())
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }
}
