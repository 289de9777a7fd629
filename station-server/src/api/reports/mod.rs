//! Monthly report API module

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/monthly", get(handler::monthly))
        .route("/monthly/csv", get(handler::monthly_csv))
}
