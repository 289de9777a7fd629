//! Station Server - vehicle inspection shop billing backend
//!
//! # Module structure
//!
//! ```text
//! station-server/src/
//! ├── core/          # config, state, HTTP server
//! ├── auth/          # JWT authentication, role middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── printing/      # 80mm receipt rendering
//! ├── reports/       # monthly ledger export
//! └── utils/         # errors, logging, validation, time
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod printing;
pub mod reports;
pub mod utils;

// Re-export the types embedders and tests reach for
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use printing::ReceiptRenderer;
pub use reports::MonthlyReport;
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
