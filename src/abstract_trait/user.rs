use crate::{
    domain::requests::RegisterRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<UserModel, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepositoryError>;

    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserModel>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}
