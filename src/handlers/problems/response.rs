//! Problem list response DTOs

use serde::Serialize;

use crate::{
    models::{category_key, Difficulty, Language, Problem},
    services::{FilterOption, ProblemFilter},
};

/// Problem card for list and grid views
#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub category_key: String,
    pub source: String,
    pub solved: bool,
    pub languages: Vec<Language>,
}

impl From<&Problem> for ProblemSummary {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            description: problem.description.clone(),
            difficulty: problem.difficulty,
            category: problem.category.clone(),
            category_key: category_key(&problem.category),
            source: problem.source.label().to_string(),
            solved: problem.solved,
            languages: problem.languages().collect(),
        }
    }
}

/// Catalogue-wide problem list
#[derive(Debug, Serialize)]
pub struct ProblemsListResponse {
    pub problems: Vec<ProblemSummary>,
    pub total: usize,
    /// Filter selection the list was computed from
    pub applied: ProblemFilter,
    pub categories: Vec<String>,
    pub sources: Vec<FilterOption>,
    pub difficulties: Vec<Difficulty>,
}
