//! Landing view handler

use axum::{extract::State, routing::get, Json, Router};

use crate::{services::Overview, state::AppState};

/// Overview statistics for the landing view
async fn overview(State(state): State<AppState>) -> Json<Overview> {
    Json(state.overview().clone())
}

/// Overview routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(overview))
}
