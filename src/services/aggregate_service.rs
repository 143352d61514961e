//! Aggregate service
//!
//! Overview statistics for the landing view, computed once per catalogue.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{category_meta, Catalogue, Category, Difficulty, SourcePlatform};

/// Problem counts for one source platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformStats {
    /// Platform key, e.g. `leetcode`
    pub platform: String,
    pub label: String,
    pub total: usize,
    pub solved: usize,
    /// One entry per difficulty the platform uses, zero when unused
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl PlatformStats {
    fn new(platform: &SourcePlatform) -> Self {
        Self {
            platform: platform.key(),
            label: platform.label().to_string(),
            total: 0,
            solved: 0,
            by_difficulty: platform.difficulties().iter().map(|d| (*d, 0)).collect(),
        }
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.by_difficulty.get(&difficulty).copied().unwrap_or(0)
    }
}

/// Landing-page card for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub key: String,
    pub total: usize,
    pub solved: usize,
    pub icon: &'static str,
    pub description: &'static str,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        let meta = category_meta(&category.key);
        Self {
            name: category.name.clone(),
            key: category.key.clone(),
            total: category.problems.len(),
            solved: category.solved_count(),
            icon: meta.icon,
            description: meta.description,
        }
    }
}

/// Catalogue-wide totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub problems: usize,
    pub solved: usize,
    pub categories: usize,
}

/// Everything the landing view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub totals: Totals,
    pub platforms: Vec<PlatformStats>,
    pub categories: Vec<CategorySummary>,
}

impl Overview {
    pub fn platform(&self, key: &str) -> Option<&PlatformStats> {
        self.platforms.iter().find(|p| p.platform == key)
    }
}

/// Aggregate service for overview statistics
pub struct AggregateService;

impl AggregateService {
    /// Derive overview statistics from the whole catalogue
    pub fn aggregate(catalogue: &Catalogue) -> Overview {
        let mut platforms: Vec<PlatformStats> =
            SourcePlatform::KNOWN.iter().map(PlatformStats::new).collect();
        let mut categories = Vec::with_capacity(catalogue.categories().len());
        let mut totals = Totals::default();

        for category in catalogue.categories() {
            if category.key.is_empty() {
                tracing::warn!(name = %category.name, "Skipping category without a key");
                continue;
            }

            for problem in &category.problems {
                let key = problem.source.key();
                let index = match platforms.iter().position(|p| p.platform == key) {
                    Some(index) => index,
                    None => {
                        platforms.push(PlatformStats::new(&problem.source));
                        platforms.len() - 1
                    }
                };

                let stats = &mut platforms[index];
                stats.total += 1;
                *stats.by_difficulty.entry(problem.difficulty).or_insert(0) += 1;
                if problem.solved {
                    stats.solved += 1;
                }
            }

            let summary = CategorySummary::from(category);
            totals.problems += summary.total;
            totals.solved += summary.solved;
            totals.categories += 1;
            categories.push(summary);
        }

        tracing::debug!(
            problems = totals.problems,
            categories = totals.categories,
            "Overview aggregated"
        );

        Overview {
            totals,
            platforms,
            categories,
        }
    }
}
