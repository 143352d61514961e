//! Catalogue service
//!
//! Builds the list views from the filter engine's output.

use crate::{
    error::{AppError, AppResult},
    handlers::{
        problems::response::{ProblemSummary, ProblemsListResponse},
        questions::response::{CategoryProblemsResponse, ListStats},
    },
    models::{Catalogue, Category, Difficulty},
};

use super::{CategorySummary, FilterService, ProblemFilter};

/// Catalogue service for list views
pub struct CatalogueService;

impl CatalogueService {
    /// Find a category by key or name
    pub fn get_category<'a>(catalogue: &'a Catalogue, value: &str) -> AppResult<&'a Category> {
        catalogue.find_category(value).ok_or_else(|| {
            tracing::warn!(category = %value, "Category not found");
            AppError::NotFound("Category not found".to_string())
        })
    }

    /// List problems across every category
    pub fn list_problems(catalogue: &Catalogue, filter: ProblemFilter) -> ProblemsListResponse {
        let visible = FilterService::filter(catalogue.problems(), &filter);
        if !filter.is_empty() {
            tracing::debug!(?filter, matched = visible.len(), "Filtered problem list");
        }

        ProblemsListResponse {
            total: visible.len(),
            problems: visible.into_iter().map(ProblemSummary::from).collect(),
            categories: catalogue
                .category_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            sources: FilterService::available_sources(catalogue.problems(), filter.source.as_ref()),
            difficulties: Difficulty::ALL.to_vec(),
            applied: filter,
        }
    }

    /// List one category's problems
    ///
    /// Platform options are computed from the whole category, so picking a
    /// platform never hides the other buttons.
    pub fn list_category(
        catalogue: &Catalogue,
        category: &str,
        mut filter: ProblemFilter,
    ) -> AppResult<CategoryProblemsResponse> {
        let category = Self::get_category(catalogue, category)?;
        filter.category = None;

        let visible = FilterService::filter(&category.problems, &filter);
        let stats = ListStats {
            total: visible.len(),
            solved: visible.iter().filter(|p| p.solved).count(),
        };

        Ok(CategoryProblemsResponse {
            category: CategorySummary::from(category),
            problems: visible.into_iter().map(ProblemSummary::from).collect(),
            stats,
            filters: FilterService::available_sources(&category.problems, filter.source.as_ref()),
            applied: filter,
        })
    }
}
