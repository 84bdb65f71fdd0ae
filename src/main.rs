use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workout_tracker::api::{create_routes, AppState};
use workout_tracker::auth::JwtTokenResolver;
use workout_tracker::config::{AppConfig, DatabaseConfig};
use workout_tracker::storage::PgWorkoutStore;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load application config")?;
    init_tracing(&config.log_level);

    let db_config = DatabaseConfig::from_env();
    info!(environment = %config.environment, "Starting workout tracker");

    let pool = db_config.create_pool().await?;
    if db_config.run_migrations {
        db_config.migrate(&pool).await?;
        info!("Database migrations applied");
    }

    let state = AppState::new(
        Arc::new(JwtTokenResolver::new(&config.jwt_secret)),
        Arc::new(PgWorkoutStore::new(pool)),
    );
    let app = create_routes(state);

    let address = config.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Workout tracker listening on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
