//! Database Module
//!
//! Handles SQLite connection pool and migrations

pub mod repository;

use crate::utils::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database service - owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Create a new database service with WAL mode
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        // Build connection options: WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON")
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        // busy_timeout: wait 5s on write contention instead of failing
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        // Run migrations (ignore previously applied but now removed migrations)
        sqlx::migrate!("./migrations")
            .set_ignore_missing(true)
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        // First run: make sure someone can log in
        seed_default_admin(&pool).await?;

        Ok(Self { pool })
    }
}

/// Create the default admin account when the staff table is empty.
///
/// Credentials come from ADMIN_EMAIL / ADMIN_PASSWORD; the generated
/// defaults are for first-boot setup only and are logged as a warning.
async fn seed_default_admin(pool: &SqlitePool) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count staff: {e}")))?;

    if count > 0 {
        return Ok(());
    }

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@station.local".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string());

    let data = shared::models::UserCreate {
        user_name: "admin".to_string(),
        email: email.clone(),
        phone_number: String::new(),
        password,
        role: "admin".to_string(),
    };
    repository::user::create(pool, data)
        .await
        .map_err(AppError::from)?;

    tracing::warn!(email = %email, "Seeded default admin account - change its password");
    Ok(())
}
