//! Router assembly.

pub mod book;
pub mod common;

pub use book::book_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Full application router: common routes at the root, book routes under `/api`.
/// Bodies over `body_limit_bytes` fail extraction and surface as the handler's JSON error.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", book_routes(state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
