//! Heading API module

mod handler;

use axum::{
    routing::{get, put},
    Router,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/headings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/visible", get(handler::list_visible))
        .route(
            "/{id}",
            put(handler::update).get(handler::get_by_id).delete(handler::delete),
        )
}
