//! Category list and problem detail handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions/{category}", get(handler::list_category))
        .route("/question/{category}/{id}", get(handler::get_problem))
        .route("/question/{category}/{id}/solution", get(handler::get_solution))
}
