use anyhow::{Context, Result};
use dotenv::dotenv;
use laptopstore::{
    config::{Config, ConnectionManager},
    handler::AppRouter,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger("laptopstore");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to create database pool")?;

    if config.run_migrations {
        info!("🔄 Running database migrations");
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        info!("✅ Migrations complete");
    }

    let state = AppState::new(pool, &config);

    AppRouter::serve(config.port, state)
        .await
        .context("Server error")?;

    Ok(())
}
