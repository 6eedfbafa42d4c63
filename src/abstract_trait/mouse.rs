use crate::{
    domain::responses::{ApiResponse, MouseResponse},
    errors::{RepositoryError, ServiceError},
    model::Mouse as MouseModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMouseQueryRepository = Arc<dyn MouseQueryRepositoryTrait + Send + Sync>;
pub type DynMouseService = Arc<dyn MouseServiceTrait + Send + Sync>;

#[async_trait]
pub trait MouseQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<MouseModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MouseModel>, RepositoryError>;
    /// Mice with stock on hand.
    async fn find_available(&self) -> Result<Vec<MouseModel>, RepositoryError>;
    /// Case-insensitive substring match on brand or model.
    async fn search(&self, term: &str) -> Result<Vec<MouseModel>, RepositoryError>;
    /// Case-insensitive exact brand match.
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<MouseModel>, RepositoryError>;
    /// Case-insensitive exact match on the mouse type (wired, wireless, ..).
    async fn find_by_type(&self, mouse_type: &str) -> Result<Vec<MouseModel>, RepositoryError>;
}

#[async_trait]
pub trait MouseServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<MouseResponse>, ServiceError>;
    async fn find_available(&self) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError>;
    async fn search(&self, term: &str) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError>;
    async fn find_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError>;
    async fn find_by_type(
        &self,
        mouse_type: &str,
    ) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError>;
}
