use chrono_tz::Tz;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 8080 | HTTP service port |
/// | DATABASE_PATH | ./station.db | SQLite database file |
/// | BUSINESS_TZ | Asia/Bangkok | Business timezone |
/// | PRINTER_ADDR | (unset) | Receipt printer, `host:port` |
/// | PRINTER_WIDTH | 48 | Paper width in columns (80mm = 48) |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/station.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Business timezone for date validation and receipt dates
    pub timezone: Tz,
    /// Receipt printer address (`host:port`), None disables printing
    pub printer_addr: Option<String>,
    /// Paper width in columns
    pub printer_width: usize,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables,
    /// falling back to defaults when unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./station.db".into()),
            timezone: std::env::var("BUSINESS_TZ")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Asia::Bangkok),
            printer_addr: std::env::var("PRINTER_ADDR").ok().filter(|a| !a.is_empty()),
            printer_width: std::env::var("PRINTER_WIDTH")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(48),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the fields tests care about
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
