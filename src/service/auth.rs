use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct AuthService {
    user: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(user: DynUserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        Self { user, hashing, jwt }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 Registering user '{}'", req.username);

        if self.user.find_by_username(&req.username).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "Username '{}' is already taken",
                req.username
            ))));
        }

        if self.user.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "Email '{}' is already registered",
                req.email
            ))));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;
        let user = self.user.create_user(req, &password_hash).await?;

        info!("✅ User '{}' registered with ID {}", user.username, user.id);

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user = self
            .user
            .find_by_username(&req.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if self
            .hashing
            .compare_password(&user.password_hash, &req.password)
            .await
            .is_err()
        {
            error!("⚠️ Failed login attempt for '{}'", req.username);
            return Err(ServiceError::InvalidCredentials);
        }

        let access_token = self.jwt.generate_token(user.id, &user.role, "access")?;

        info!("🔑 User '{}' logged in", user.username);

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                token_type: "Bearer".to_string(),
            },
        ))
    }

    async fn get_me(&self, user_id: i64) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .user
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        Ok(ApiResponse::success(
            "User fetched successfully",
            UserResponse::from(user),
        ))
    }
}
