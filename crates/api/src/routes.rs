use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/admin/cache/stats", get(handlers::get_cache_stats))
        .merge(handlers::doh::routes())
        .merge(handlers::records::routes())
        .with_state(state)
}
