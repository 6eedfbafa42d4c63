use crate::{config::Claims, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    fn generate_token(
        &self,
        user_id: i64,
        role: &str,
        token_type: &str,
    ) -> Result<String, ServiceError>;

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<Claims, ServiceError>;
}
