use crate::{
    domain::responses::{ApiResponse, LaptopResponse},
    errors::{RepositoryError, ServiceError},
    model::Laptop as LaptopModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynLaptopQueryRepository = Arc<dyn LaptopQueryRepositoryTrait + Send + Sync>;
pub type DynLaptopService = Arc<dyn LaptopServiceTrait + Send + Sync>;

#[async_trait]
pub trait LaptopQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<LaptopModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<LaptopModel>, RepositoryError>;
    /// Laptops with stock on hand.
    async fn find_available(&self) -> Result<Vec<LaptopModel>, RepositoryError>;
    /// Case-insensitive substring match on brand or model.
    async fn search(&self, term: &str) -> Result<Vec<LaptopModel>, RepositoryError>;
    /// Case-insensitive exact brand match.
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<LaptopModel>, RepositoryError>;
}

#[async_trait]
pub trait LaptopServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<LaptopResponse>, ServiceError>;
    async fn find_available(&self) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError>;
    async fn search(&self, term: &str) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError>;
    async fn find_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<Vec<LaptopResponse>>, ServiceError>;
}
