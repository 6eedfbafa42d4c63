use crate::{
    abstract_trait::UserRepositoryTrait, config::ConnectionPool,
    domain::requests::RegisterRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(
        &self,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, 'USER', current_timestamp)
            RETURNING id, username, email, password_hash, role, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            if let Some(db_err) = err.as_database_error()
                && db_err.is_unique_violation()
            {
                return RepositoryError::AlreadyExists(format!(
                    "username or email already taken: {}",
                    req.username
                ));
            }
            error!("❌ Failed to create user {}: {err:?}", req.username);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {} ({})", user.id, user.username);
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }
}
