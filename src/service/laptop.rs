use crate::{
    abstract_trait::{DynLaptopQueryRepository, LaptopServiceTrait},
    domain::responses::{ApiResponse, LaptopResponse},
    errors::{RepositoryError, ServiceError},
    model::Laptop,
};
use async_trait::async_trait;

pub struct LaptopService {
    repository: DynLaptopQueryRepository,
}

impl LaptopService {
    pub fn new(repository: DynLaptopQueryRepository) -> Self {
        Self { repository }
    }

    fn listing(message: &str, laptops: Vec<Laptop>) -> ApiResponse<Vec<LaptopResponse>> {
        ApiResponse::success(message, laptops.into_iter().map(LaptopResponse::from).collect())
    }
}

#[async_trait]
impl LaptopServiceTrait for LaptopService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError> {
        let laptops = self.repository.find_all().await?;
        Ok(Self::listing("Laptops fetched successfully", laptops))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<LaptopResponse>, ServiceError> {
        let laptop = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Laptop fetched successfully",
            LaptopResponse::from(laptop),
        ))
    }

    async fn find_available(&self) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError> {
        let laptops = self.repository.find_available().await?;
        Ok(Self::listing("Available laptops fetched successfully", laptops))
    }

    async fn search(&self, term: &str) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError> {
        let laptops = self.repository.search(term).await?;
        Ok(Self::listing("Laptops searched successfully", laptops))
    }

    async fn find_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError> {
        let laptops = self.repository.find_by_brand(brand).await?;
        Ok(Self::listing("Laptops fetched successfully", laptops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::LaptopQueryRepositoryTrait;
    use std::sync::Arc;

    struct MemLaptops {
        rows: Vec<Laptop>,
    }

    fn laptop(id: i64, brand: &str, model: &str, stock: i32) -> Laptop {
        Laptop {
            id,
            brand: brand.to_string(),
            model: model.to_string(),
            processor: "Intel Core i7".to_string(),
            ram_gb: 16,
            storage_gb: 512,
            graphics: "Integrated".to_string(),
            screen_size: 13.4,
            price: 99900,
            stock_quantity: stock,
            created_at: None,
        }
    }

    #[async_trait]
    impl LaptopQueryRepositoryTrait for MemLaptops {
        async fn find_all(&self) -> Result<Vec<Laptop>, RepositoryError> {
            Ok(self.rows.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Laptop>, RepositoryError> {
            Ok(self.rows.iter().find(|l| l.id == id).cloned())
        }

        async fn find_available(&self) -> Result<Vec<Laptop>, RepositoryError> {
            Ok(self
                .rows
                .iter()
                .filter(|l| l.stock_quantity > 0)
                .cloned()
                .collect())
        }

        async fn search(&self, term: &str) -> Result<Vec<Laptop>, RepositoryError> {
            let term = term.to_lowercase();
            Ok(self
                .rows
                .iter()
                .filter(|l| {
                    l.brand.to_lowercase().contains(&term)
                        || l.model.to_lowercase().contains(&term)
                })
                .cloned()
                .collect())
        }

        async fn find_by_brand(&self, brand: &str) -> Result<Vec<Laptop>, RepositoryError> {
            Ok(self
                .rows
                .iter()
                .filter(|l| l.brand.eq_ignore_ascii_case(brand))
                .cloned()
                .collect())
        }
    }

    fn service() -> LaptopService {
        LaptopService::new(Arc::new(MemLaptops {
            rows: vec![
                laptop(1, "Dell", "XPS 13", 5),
                laptop(2, "Lenovo", "ThinkPad X1", 0),
                laptop(3, "Dell", "Latitude 5440", 2),
            ],
        }))
    }

    #[tokio::test]
    async fn listings_map_rows_to_responses() {
        let service = service();

        let all = service.find_all().await.unwrap().data;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].brand, "Dell");

        let one = service.find_by_id(2).await.unwrap().data;
        assert_eq!(one.model, "ThinkPad X1");

        assert!(matches!(
            service.find_by_id(99).await.unwrap_err(),
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn available_excludes_sold_out_rows() {
        let available = service().find_available().await.unwrap().data;
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|l| l.stock_quantity > 0));
    }

    #[tokio::test]
    async fn search_and_brand_match_case_insensitively() {
        let service = service();

        let hits = service.search("xps").await.unwrap().data;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let dells = service.find_by_brand("dell").await.unwrap().data;
        assert_eq!(dells.len(), 2);
        assert!(service.find_by_brand("Apple").await.unwrap().data.is_empty());
    }
}
