use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared handles for every request
///
/// Cloning is cheap: the pool and JWT service are reference counted.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | configuration (immutable) |
/// | pool | SqlitePool | SQLite connection pool |
/// | jwt_service | Arc<JwtService> | JWT token service |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Open the database, run migrations and build the shared state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            jwt_service,
        })
    }
}
