//! Filter service
//!
//! Pure predicate filtering over catalogue problems. Output keeps the input
//! order and never contains a problem that was not in the input.

use serde::{Deserialize, Serialize};

use crate::{
    constants::platforms,
    models::{category_key, Difficulty, Problem, SourcePlatform},
};

/// The user's current filter selection
///
/// Every predicate is optional; an unset predicate lets every problem through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemFilter {
    /// Case-insensitive substring of the title
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Category name or key
    pub category: Option<String>,
    pub source: Option<SourcePlatform>,
}

impl ProblemFilter {
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none()
            && self.difficulty.is_none()
            && self.category.is_none()
            && self.source.is_none()
    }

    /// Lowercased search term, `None` when blank
    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn matches(&self, problem: &Problem, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !problem.title.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if problem.difficulty != difficulty {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if problem.category != category && category_key(&problem.category) != category {
                return false;
            }
        }
        if let Some(source) = &self.source {
            if problem.source.key() != source.key() {
                return false;
            }
        }
        true
    }
}

/// A platform filter button offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// Filter service for list views
pub struct FilterService;

impl FilterService {
    /// Apply every set predicate of `filter` to `problems`
    pub fn filter<'a, I>(problems: I, filter: &ProblemFilter) -> Vec<&'a Problem>
    where
        I: IntoIterator<Item = &'a Problem>,
    {
        let needle = filter.search_term();
        problems
            .into_iter()
            .filter(|p| filter.matches(p, needle.as_deref()))
            .collect()
    }

    /// Platform filter options for a set of problems
    ///
    /// `all` is always offered. A known platform is offered only when at
    /// least one of the given problems comes from it.
    pub fn available_sources<'a, I>(problems: I, selected: Option<&SourcePlatform>) -> Vec<FilterOption>
    where
        I: IntoIterator<Item = &'a Problem>,
        I::IntoIter: Clone,
    {
        let problems = problems.into_iter();
        let selected_key = selected.map(SourcePlatform::key);

        let mut options = vec![FilterOption {
            id: platforms::ALL.to_string(),
            label: "All".to_string(),
            selected: selected_key.is_none(),
        }];

        for platform in SourcePlatform::KNOWN {
            if problems.clone().any(|p| &p.source == platform) {
                let id = platform.key();
                options.push(FilterOption {
                    selected: selected_key.as_deref() == Some(id.as_str()),
                    label: platform.label().to_string(),
                    id,
                });
            }
        }

        options
    }
}
