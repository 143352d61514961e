//! Category list and problem detail handler implementations

use anyhow::Context;
use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, Response},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    services::{CatalogueService, ProblemService},
    state::AppState,
    utils::parse_problem_id,
};

use super::{
    request::{CategoryQuery, DetailQuery},
    response::{CategoryProblemsResponse, ProblemDetailResponse},
};

/// List the problems of one category
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<Json<CategoryProblemsResponse>> {
    query.validate()?;
    let filter = query.to_filter()?;

    let response = CatalogueService::list_category(state.catalogue(), &category, filter)?;
    Ok(Json(response))
}

/// Get a problem's detail view
pub async fn get_problem(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
) -> AppResult<Json<ProblemDetailResponse>> {
    let id = parse_problem_id(&id)?;
    let requested = query.language()?;

    let detail = ProblemService::get_detail(
        state.catalogue(),
        &category,
        id,
        requested,
        state.config().catalogue.default_language,
    )?;

    Ok(Json(detail))
}

/// Get a problem's solution as plain text, for copying
pub async fn get_solution(
    State(state): State<AppState>,
    Path((_category, id)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
) -> AppResult<Response<Body>> {
    let id = parse_problem_id(&id)?;
    let requested = query.language()?;

    let (language, code) = ProblemService::get_solution(
        state.catalogue(),
        id,
        requested,
        state.config().catalogue.default_language,
    )?;

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header("x-solution-language", language.as_str())
        .body(Body::from(code.to_string()))
        .context("building solution response")?;

    Ok(response)
}
