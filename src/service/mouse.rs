use crate::{
    abstract_trait::{DynMouseQueryRepository, MouseServiceTrait},
    domain::responses::{ApiResponse, MouseResponse},
    errors::{RepositoryError, ServiceError},
    model::Mouse,
};
use async_trait::async_trait;

pub struct MouseService {
    repository: DynMouseQueryRepository,
}

impl MouseService {
    pub fn new(repository: DynMouseQueryRepository) -> Self {
        Self { repository }
    }

    fn listing(message: &str, mice: Vec<Mouse>) -> ApiResponse<Vec<MouseResponse>> {
        ApiResponse::success(message, mice.into_iter().map(MouseResponse::from).collect())
    }
}

#[async_trait]
impl MouseServiceTrait for MouseService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError> {
        let mice = self.repository.find_all().await?;
        Ok(Self::listing("Mice fetched successfully", mice))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<MouseResponse>, ServiceError> {
        let mouse = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "Mouse fetched successfully",
            MouseResponse::from(mouse),
        ))
    }

    async fn find_available(&self) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError> {
        let mice = self.repository.find_available().await?;
        Ok(Self::listing("Available mice fetched successfully", mice))
    }

    async fn search(&self, term: &str) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError> {
        let mice = self.repository.search(term).await?;
        Ok(Self::listing("Mice searched successfully", mice))
    }

    async fn find_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError> {
        let mice = self.repository.find_by_brand(brand).await?;
        Ok(Self::listing("Mice fetched successfully", mice))
    }

    async fn find_by_type(
        &self,
        mouse_type: &str,
    ) -> Result<ApiResponse<Vec<MouseResponse>>, ServiceError> {
        let mice = self.repository.find_by_type(mouse_type).await?;
        Ok(Self::listing("Mice fetched successfully", mice))
    }
}
