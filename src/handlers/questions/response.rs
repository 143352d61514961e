//! Category list and problem detail response DTOs

use serde::Serialize;

use crate::{
    handlers::problems::ProblemSummary,
    models::{Difficulty, Language},
    services::{CategorySummary, FilterOption, ProblemFilter},
};

/// Counts shown in a category list header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListStats {
    pub total: usize,
    pub solved: usize,
}

/// A category's problem list
#[derive(Debug, Serialize)]
pub struct CategoryProblemsResponse {
    pub category: CategorySummary,
    pub problems: Vec<ProblemSummary>,
    /// Counts over the visible problems
    pub stats: ListStats,
    /// Platform buttons offered for this category
    pub filters: Vec<FilterOption>,
    pub applied: ProblemFilter,
}

/// A language tab on the detail view
#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub value: Language,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// Full problem detail view
#[derive(Debug, Serialize)]
pub struct ProblemDetailResponse {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub category_key: String,
    pub difficulty: Difficulty,
    pub source: String,
    pub solved: bool,
    /// Statement text before the example
    pub description: String,
    pub example: Option<String>,
    pub requested_language: Option<Language>,
    pub selected_language: Option<Language>,
    /// True when the selected language differs from the requested one
    pub language_fallback: bool,
    pub solution: Option<String>,
    pub languages: Vec<LanguageOption>,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    pub notes: Option<String>,
}
