//! Category list and problem detail request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_SEARCH_LENGTH,
    error::AppResult,
    models::{Language, SourcePlatform},
    services::ProblemFilter,
    utils::validation::{parse_difficulty, parse_language, sanitize_search},
};

/// Query parameters for a category's problem list
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryQuery {
    /// Platform key, or `all`
    pub source: Option<String>,
    #[validate(length(max = MAX_SEARCH_LENGTH))]
    pub search: Option<String>,
    pub difficulty: Option<String>,
}

impl CategoryQuery {
    /// Filter selection within a category; the category itself comes from the path
    pub fn to_filter(&self) -> AppResult<ProblemFilter> {
        Ok(ProblemFilter {
            search: self.search.as_deref().and_then(sanitize_search),
            difficulty: parse_difficulty(self.difficulty.as_deref())?,
            category: None,
            source: self.source.as_deref().and_then(SourcePlatform::from_query),
        })
    }
}

/// Query parameters for the detail and solution views
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub language: Option<String>,
}

impl DetailQuery {
    pub fn language(&self) -> AppResult<Option<Language>> {
        parse_language(self.language.as_deref())
    }
}
