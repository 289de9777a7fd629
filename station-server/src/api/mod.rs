//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - login and session info
//! - [`bills`] - bill CRUD, receipts and printing
//! - [`headings`] - front-page announcement management
//! - [`users`] - staff account management (admin only)
//! - [`expense_bills`] - shop expense records
//! - [`reports`] - monthly report export

pub mod auth;
pub mod bills;
pub mod expense_bills;
pub mod headings;
pub mod health;
pub mod reports;
pub mod users;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(bills::router())
        .merge(headings::router())
        .merge(users::router())
        .merge(expense_bills::router())
        .merge(reports::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
