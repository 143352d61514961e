//! Catalogue loading and validation
//!
//! The document is parsed as a JSON array first, then each category and
//! problem record is decoded and checked on its own. A bad record is logged
//! and skipped; only an unreadable file or a document that is not a JSON
//! array is an error.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{category_key, Catalogue, Category, Difficulty, Language, Problem, SourcePlatform};

/// Catalogue loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Failed to read catalogue {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalogue document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category record as written in the catalogue document
#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    problems: Option<Vec<Value>>,
}

/// Problem record as written in the catalogue document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblem {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    difficulty: String,
    category: Option<String>,
    source: String,
    #[serde(default)]
    solved: bool,
    #[serde(default)]
    solutions: BTreeMap<String, String>,
    time_complexity: Option<String>,
    space_complexity: Option<String>,
    notes: Option<String>,
}

/// Load the catalogue from a file on disk
pub fn load_from_path(path: &Path) -> Result<Catalogue, CatalogueError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "Loading catalogue from file");
    load_from_str(&text)
}

/// Parse and validate a catalogue document
pub fn load_from_str(text: &str) -> Result<Catalogue, CatalogueError> {
    let raw: Vec<Value> = serde_json::from_str(text)?;
    let catalogue = validate(raw);

    info!(
        categories = catalogue.categories().len(),
        problems = catalogue.len(),
        "Catalogue loaded"
    );

    Ok(catalogue)
}

fn validate(raw: Vec<Value>) -> Catalogue {
    let mut seen_categories = HashSet::new();
    let mut seen_ids = HashSet::new();
    let mut categories = Vec::with_capacity(raw.len());

    for (position, value) in raw.into_iter().enumerate() {
        let raw_category = match serde_json::from_value::<RawCategory>(value) {
            Ok(raw_category) => raw_category,
            Err(e) => {
                warn!(position, error = %e, "Skipping malformed category");
                continue;
            }
        };
        let name = raw_category.name.unwrap_or_default().trim().to_string();
        let key = category_key(&name);

        if key.is_empty() {
            warn!("Skipping category without a name");
            continue;
        }
        if !seen_categories.insert(key.clone()) {
            warn!(category = %name, "Skipping duplicate category");
            continue;
        }

        let raw_problems = raw_category.problems.unwrap_or_else(|| {
            warn!(category = %name, "Category has no problem list");
            Vec::new()
        });

        let problems = raw_problems
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawProblem>(value) {
                Ok(raw_problem) => validate_problem(raw_problem, &name, &key, &mut seen_ids),
                Err(e) => {
                    warn!(category = %name, error = %e, "Skipping malformed problem");
                    None
                }
            })
            .collect();

        categories.push(Category::new(name, problems));
    }

    Catalogue::new(categories)
}

fn validate_problem(
    raw: RawProblem,
    category: &str,
    parent_key: &str,
    seen_ids: &mut HashSet<u64>,
) -> Option<Problem> {
    if let Some(declared) = raw.category.as_deref() {
        if category_key(declared) != parent_key {
            warn!(
                id = raw.id,
                declared = %declared,
                category = %category,
                "Skipping problem filed under a different category"
            );
            return None;
        }
    }

    if !seen_ids.insert(raw.id) {
        warn!(id = raw.id, title = %raw.title, "Skipping problem with duplicate id");
        return None;
    }

    let source = SourcePlatform::from(raw.source);

    let difficulty = match raw.difficulty.parse::<Difficulty>() {
        Ok(d) if source.accepts(d) => d,
        Ok(d) => {
            warn!(
                id = raw.id,
                difficulty = %d,
                source = %source,
                "Skipping problem with difficulty not used by its platform"
            );
            return None;
        }
        Err(e) => {
            warn!(id = raw.id, error = %e, "Skipping problem with unknown difficulty");
            return None;
        }
    };

    let mut solutions = BTreeMap::new();
    for (lang, code) in raw.solutions {
        match lang.parse::<Language>() {
            Ok(language) => {
                solutions.insert(language, code);
            }
            Err(e) => {
                debug!(id = raw.id, error = %e, "Dropping solution in unsupported language");
            }
        }
    }

    Some(Problem {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        difficulty,
        category: category.to_string(),
        source,
        solved: raw.solved,
        solutions,
        time_complexity: raw.time_complexity,
        space_complexity: raw.space_complexity,
        notes: raw.notes,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::constants::BUNDLED_CATALOGUE;

    #[test]
    fn test_loads_original_document_format() {
        let doc = r#"[
            {
                "name": "Linked Lists",
                "problems": [
                    {
                        "id": 1,
                        "title": "Reverse List",
                        "description": "Reverse it. Example: 1->2 becomes 2->1",
                        "difficulty": "Easy",
                        "category": "linked-lists",
                        "source": "LeetCode",
                        "solved": true,
                        "solutions": { "python": "def f(): pass", "java": "class S {}" },
                        "timeComplexity": "O(n)",
                        "spaceComplexity": "O(1)"
                    }
                ]
            }
        ]"#;

        let catalogue = load_from_str(doc).unwrap();
        let problem = catalogue.find_problem(1).unwrap();

        assert_eq!(problem.category, "Linked Lists");
        assert_eq!(problem.source, SourcePlatform::LeetCode);
        assert!(problem.solved);
        assert_eq!(problem.time_complexity.as_deref(), Some("O(n)"));
        assert_eq!(
            problem.languages().collect::<Vec<_>>(),
            vec![Language::Python, Language::Java]
        );
    }

    #[test]
    fn test_skips_invalid_records() {
        let doc = r#"[
            { "name": "", "problems": [] },
            {
                "name": "Array",
                "problems": [
                    { "id": 1, "title": "Ok", "difficulty": "Easy", "source": "LeetCode" },
                    { "id": 1, "title": "Duplicate id", "difficulty": "Easy", "source": "LeetCode" },
                    { "id": 2, "title": "Wrong level", "difficulty": "School", "source": "LeetCode" },
                    { "id": 3, "title": "Unknown level", "difficulty": "Extreme", "source": "LeetCode" },
                    { "id": 4, "title": "Elsewhere", "difficulty": "Easy", "source": "LeetCode", "category": "Trees" },
                    { "id": 5, "title": "Gfg school", "difficulty": "School", "source": "GeeksforGeeks" }
                ]
            },
            { "name": "array", "problems": [
                { "id": 6, "title": "Duplicate category", "difficulty": "Easy", "source": "LeetCode" }
            ] }
        ]"#;

        let catalogue = load_from_str(doc).unwrap();

        assert_eq!(catalogue.categories().len(), 1);
        let ids: Vec<u64> = catalogue.problems().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(catalogue.find_problem(1).unwrap().title, "Ok");
    }

    #[test]
    fn test_skips_structurally_broken_records() {
        let doc = r#"[
            {
                "name": "Array",
                "problems": [
                    { "id": 1, "title": "Two Sum", "difficulty": "Easy", "source": "LeetCode" },
                    { "id": 2, "difficulty": "Easy", "source": "LeetCode" },
                    { "id": "3", "title": "String id", "difficulty": "Easy", "source": "LeetCode" },
                    { "id": -4, "title": "Negative id", "difficulty": "Easy", "source": "LeetCode" },
                    "not a problem"
                ]
            },
            { "name": "Trees", "problems": null },
            { "name": "Graphs", "problems": "many" },
            42,
            {
                "name": "Strings",
                "problems": [
                    { "id": 5, "title": "Valid Anagram", "difficulty": "Easy", "source": "LeetCode" }
                ]
            }
        ]"#;

        let catalogue = load_from_str(doc).unwrap();

        assert_eq!(catalogue.category_names(), vec!["Array", "Trees", "Strings"]);
        let ids: Vec<u64> = catalogue.problems().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(catalogue.find_category("trees").unwrap().problems.is_empty());
    }

    #[test]
    fn test_drops_unsupported_languages() {
        let doc = r#"[{ "name": "Array", "problems": [
            { "id": 1, "title": "A", "difficulty": "Easy", "source": "Practice",
              "solutions": { "cobol": "DISPLAY", "c++": "int main(){}" } }
        ]}]"#;

        let catalogue = load_from_str(doc).unwrap();
        let problem = catalogue.find_problem(1).unwrap();

        assert_eq!(problem.languages().collect::<Vec<_>>(), vec![Language::Cpp]);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(load_from_str("{ not json"), Err(CatalogueError::Parse(_))));
        assert!(matches!(load_from_str(r#"{"name": "x"}"#), Err(CatalogueError::Parse(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "name": "Strings", "problems": [
                {{ "id": 9, "title": "Valid Anagram", "difficulty": "Easy", "source": "leetcode" }}
            ]}}]"#
        )
        .unwrap();

        let catalogue = load_from_path(file.path()).unwrap();
        assert_eq!(catalogue.find_problem(9).unwrap().category, "Strings");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CatalogueError::Read { .. })));
    }

    #[test]
    fn test_bundled_catalogue_is_valid() {
        let catalogue = load_from_str(BUNDLED_CATALOGUE).unwrap();
        assert!(!catalogue.is_empty());
        assert!(catalogue.problems().all(|p| !p.solutions.is_empty()));
    }
}
