use crate::{
    abstract_trait::LaptopQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Laptop,
};
use async_trait::async_trait;
use tracing::error;

pub struct LaptopQueryRepository {
    db: ConnectionPool,
}

impl LaptopQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LaptopQueryRepositoryTrait for LaptopQueryRepository {
    async fn find_all(&self) -> Result<Vec<Laptop>, RepositoryError> {
        sqlx::query_as::<_, Laptop>("SELECT * FROM laptops ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list laptops: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Laptop>, RepositoryError> {
        sqlx::query_as::<_, Laptop>("SELECT * FROM laptops WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch laptop {id}: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_available(&self) -> Result<Vec<Laptop>, RepositoryError> {
        sqlx::query_as::<_, Laptop>("SELECT * FROM laptops WHERE stock_quantity > 0 ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list available laptops: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn search(&self, term: &str) -> Result<Vec<Laptop>, RepositoryError> {
        sqlx::query_as::<_, Laptop>(
            "SELECT * FROM laptops \
             WHERE brand ILIKE '%' || $1 || '%' OR model ILIKE '%' || $1 || '%' \
             ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to search laptops for '{term}': {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Laptop>, RepositoryError> {
        sqlx::query_as::<_, Laptop>("SELECT * FROM laptops WHERE brand ILIKE $1 ORDER BY id")
            .bind(brand)
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list laptops of brand '{brand}': {err:?}");
                RepositoryError::from(err)
            })
    }
}
