//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by view.

pub mod health;
pub mod overview;
pub mod problems;
pub mod questions;

use axum::Router;

use crate::state::AppState;

/// Create all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(overview::routes())
        .merge(problems::routes())
        .merge(questions::routes())
}
