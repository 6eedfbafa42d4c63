use crate::{
    abstract_trait::MouseQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Mouse,
};
use async_trait::async_trait;
use tracing::error;

pub struct MouseQueryRepository {
    db: ConnectionPool,
}

impl MouseQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MouseQueryRepositoryTrait for MouseQueryRepository {
    async fn find_all(&self) -> Result<Vec<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>("SELECT * FROM mice ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list mice: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>("SELECT * FROM mice WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch mouse {id}: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_available(&self) -> Result<Vec<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>("SELECT * FROM mice WHERE stock_quantity > 0 ORDER BY id")
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list available mice: {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn search(&self, term: &str) -> Result<Vec<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>(
            "SELECT * FROM mice \
             WHERE brand ILIKE '%' || $1 || '%' OR model ILIKE '%' || $1 || '%' \
             ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to search mice for '{term}': {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>("SELECT * FROM mice WHERE brand ILIKE $1 ORDER BY id")
            .bind(brand)
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list mice of brand '{brand}': {err:?}");
                RepositoryError::from(err)
            })
    }

    async fn find_by_type(&self, mouse_type: &str) -> Result<Vec<Mouse>, RepositoryError> {
        sqlx::query_as::<_, Mouse>("SELECT * FROM mice WHERE mouse_type ILIKE $1 ORDER BY id")
            .bind(mouse_type)
            .fetch_all(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to list mice of type '{mouse_type}': {err:?}");
                RepositoryError::from(err)
            })
    }
}
