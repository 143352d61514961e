//! Category model

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Problem;
use crate::constants::categories;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A named, ordered group of problems
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    /// URL-safe key derived from the name
    pub key: String,
    pub problems: Vec<Problem>,
}

impl Category {
    pub fn new(name: impl Into<String>, problems: Vec<Problem>) -> Self {
        let name = name.into();
        Self {
            key: category_key(&name),
            name,
            problems,
        }
    }

    /// Whether a route or query value names this category
    pub fn matches(&self, value: &str) -> bool {
        category_key(value) == self.key
    }

    pub fn solved_count(&self) -> usize {
        self.problems.iter().filter(|p| p.solved).count()
    }
}

/// Normalize a category name into its key: lowercase, whitespace runs become `-`
pub fn category_key(name: &str) -> String {
    WHITESPACE
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Icon and blurb shown for a category on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    pub icon: &'static str,
    pub description: &'static str,
}

impl Default for CategoryMeta {
    fn default() -> Self {
        Self {
            icon: categories::DEFAULT_ICON,
            description: categories::DEFAULT_DESCRIPTION,
        }
    }
}

/// Look up display metadata for a category key, falling back to the default
pub fn category_meta(key: &str) -> CategoryMeta {
    categories::KNOWN
        .iter()
        .find(|(known, _, _)| *known == key)
        .map(|&(_, icon, description)| CategoryMeta { icon, description })
        .unwrap_or_default()
}
