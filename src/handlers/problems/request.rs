//! Problem list request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_SEARCH_LENGTH,
    error::AppResult,
    models::SourcePlatform,
    services::ProblemFilter,
    utils::validation::{parse_difficulty, sanitize_search},
};

/// Query parameters for the catalogue-wide list
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListProblemsQuery {
    #[validate(length(max = MAX_SEARCH_LENGTH))]
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    /// Platform key, or `all`
    pub source: Option<String>,
}

impl ListProblemsQuery {
    /// Convert the raw query into a filter, rejecting unknown values
    pub fn to_filter(&self) -> AppResult<ProblemFilter> {
        Ok(ProblemFilter {
            search: self.search.as_deref().and_then(sanitize_search),
            difficulty: parse_difficulty(self.difficulty.as_deref())?,
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            source: self.source.as_deref().and_then(SourcePlatform::from_query),
        })
    }
}
