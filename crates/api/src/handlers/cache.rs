use crate::{dto::CacheStatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_cache_stats")]
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.get_cache_stats.execute();

    debug!(
        entries = stats.entries,
        hits = stats.hits,
        misses = stats.misses,
        "Cache statistics retrieved"
    );

    Json(CacheStatsResponse::from(stats))
}
