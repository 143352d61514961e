//! Catalogue model
//!
//! The validated, immutable set of categories served by the application.

use std::collections::HashMap;

use super::{Category, Problem};

/// Read-only problem catalogue
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    categories: Vec<Category>,
    /// Problem id -> (category index, problem index)
    index: HashMap<u64, (usize, usize)>,
}

impl Catalogue {
    /// Build a catalogue from already-validated categories.
    ///
    /// Ids must be unique; the loader guarantees this. On a duplicate the
    /// first occurrence stays reachable through [`Catalogue::find_problem`].
    pub fn new(categories: Vec<Category>) -> Self {
        let mut index = HashMap::new();
        for (ci, category) in categories.iter().enumerate() {
            for (pi, problem) in category.problems.iter().enumerate() {
                index.entry(problem.id).or_insert((ci, pi));
            }
        }
        Self { categories, index }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every problem in dataset order
    pub fn problems(&self) -> impl Iterator<Item = &Problem> + Clone {
        self.categories.iter().flat_map(|c| c.problems.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Find a category by key or name, ignoring case
    pub fn find_category(&self, value: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(value))
    }

    pub fn find_problem(&self, id: u64) -> Option<&Problem> {
        let (ci, pi) = *self.index.get(&id)?;
        self.categories.get(ci)?.problems.get(pi)
    }

    /// The category a problem belongs to
    pub fn category_of(&self, id: u64) -> Option<&Category> {
        let (ci, _) = *self.index.get(&id)?;
        self.categories.get(ci)
    }

    /// Category names in dataset order
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}
