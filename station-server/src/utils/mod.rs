//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResponse`] - unified error and response envelope
//! - [`AppResult`] - handler result alias
//! - logging, validation and time helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
