//! Problem list handler implementations

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::{error::AppResult, services::CatalogueService, state::AppState};

use super::{request::ListProblemsQuery, response::ProblemsListResponse};

/// List problems across every category
pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    query.validate()?;
    let filter = query.to_filter()?;

    Ok(Json(CatalogueService::list_problems(state.catalogue(), filter)))
}
