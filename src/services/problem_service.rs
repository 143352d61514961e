//! Problem service

use crate::{
    constants::EXAMPLE_MARKER,
    error::{AppError, AppResult},
    handlers::questions::response::{LanguageOption, ProblemDetailResponse},
    models::{category_key, Catalogue, Language, Problem},
};

/// Split a description into its statement and the text after `Example:`
///
/// Only the text between the first and second marker is kept as the example.
pub fn split_description(text: &str) -> (String, Option<String>) {
    let mut parts = text.split(EXAMPLE_MARKER);
    let body = parts.next().unwrap_or_default().trim().to_string();
    let example = parts
        .next()
        .map(str::trim)
        .filter(|example| !example.is_empty())
        .map(str::to_string);

    (body, example)
}

/// Pick the language to show for a problem
///
/// Order: the requested language, then the configured default, then the
/// first available language in priority order. `None` only when the
/// problem has no solutions at all.
pub fn resolve_language(
    problem: &Problem,
    requested: Option<Language>,
    default: Language,
) -> Option<Language> {
    requested
        .into_iter()
        .chain(std::iter::once(default))
        .find(|lang| problem.solutions.contains_key(lang))
        .or_else(|| problem.languages().next())
}

/// Problem service for detail views
pub struct ProblemService;

impl ProblemService {
    /// Get a problem by id
    pub fn get_problem(catalogue: &Catalogue, id: u64) -> AppResult<&Problem> {
        catalogue.find_problem(id).ok_or_else(|| {
            tracing::warn!(id, "Problem not found");
            AppError::NotFound("Problem not found".to_string())
        })
    }

    /// Build the detail view for a problem
    pub fn get_detail(
        catalogue: &Catalogue,
        category: &str,
        id: u64,
        requested: Option<Language>,
        default: Language,
    ) -> AppResult<ProblemDetailResponse> {
        let problem = Self::get_problem(catalogue, id)?;
        let key = catalogue
            .category_of(id)
            .map(|c| c.key.clone())
            .unwrap_or_else(|| category_key(&problem.category));

        if category_key(category) != key {
            tracing::debug!(
                id,
                requested = %category,
                actual = %key,
                "Problem requested under another category"
            );
        }

        let selected = resolve_language(problem, requested, default);
        let (description, example) = split_description(&problem.description);

        let languages = problem
            .languages()
            .map(|lang| LanguageOption {
                value: lang,
                label: lang.label(),
                icon: lang.icon(),
                selected: Some(lang) == selected,
            })
            .collect();

        Ok(ProblemDetailResponse {
            id: problem.id,
            title: problem.title.clone(),
            category: problem.category.clone(),
            category_key: key,
            difficulty: problem.difficulty,
            source: problem.source.label().to_string(),
            solved: problem.solved,
            description,
            example,
            requested_language: requested,
            selected_language: selected,
            language_fallback: requested.is_some() && requested != selected,
            solution: selected.and_then(|lang| problem.solution(lang)).map(str::to_string),
            languages,
            time_complexity: problem.time_complexity.clone(),
            space_complexity: problem.space_complexity.clone(),
            notes: problem.notes.clone(),
        })
    }

    /// Raw solution text for copying
    pub fn get_solution(
        catalogue: &Catalogue,
        id: u64,
        requested: Option<Language>,
        default: Language,
    ) -> AppResult<(Language, &str)> {
        let problem = Self::get_problem(catalogue, id)?;

        resolve_language(problem, requested, default)
            .and_then(|lang| problem.solution(lang).map(|code| (lang, code)))
            .ok_or_else(|| {
                tracing::warn!(id, "Problem has no solutions");
                AppError::NotFound("Problem has no solutions".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, SourcePlatform};
    use crate::test_utils::{catalogue, problem, with_solutions};

    #[test]
    fn test_split_description() {
        let (body, example) = split_description("Find two numbers.\nExample:\n  [2,7] -> [0,1]\n");
        assert_eq!(body, "Find two numbers.");
        assert_eq!(example.as_deref(), Some("[2,7] -> [0,1]"));

        let (body, example) = split_description("  No example here. ");
        assert_eq!(body, "No example here.");
        assert_eq!(example, None);

        let (_, example) = split_description("Text Example:   ");
        assert_eq!(example, None);

        let (body, example) = split_description("A Example: one Example: two");
        assert_eq!(body, "A");
        assert_eq!(example.as_deref(), Some("one"));
    }

    #[test]
    fn test_resolve_language_prefers_request() {
        let p = with_solutions(
            problem(1, "A", Difficulty::Easy, SourcePlatform::LeetCode),
            &[Language::Java, Language::Python],
        );
        assert_eq!(resolve_language(&p, Some(Language::Java), Language::Python), Some(Language::Java));
    }

    #[test]
    fn test_resolve_language_falls_back_to_default_then_priority() {
        let p = with_solutions(
            problem(1, "A", Difficulty::Easy, SourcePlatform::LeetCode),
            &[Language::Rust, Language::Java],
        );

        assert_eq!(resolve_language(&p, Some(Language::Go), Language::Rust), Some(Language::Rust));
        assert_eq!(resolve_language(&p, Some(Language::Go), Language::Python), Some(Language::Java));
        assert_eq!(resolve_language(&p, None, Language::Python), Some(Language::Java));
    }

    #[test]
    fn test_resolve_language_without_solutions() {
        let p = with_solutions(problem(1, "A", Difficulty::Easy, SourcePlatform::LeetCode), &[]);
        assert_eq!(resolve_language(&p, Some(Language::Python), Language::Python), None);
    }

    #[test]
    fn test_detail_reports_fallback() {
        let catalogue = catalogue(vec![(
            "Array",
            vec![with_solutions(
                problem(1, "Two Sum", Difficulty::Easy, SourcePlatform::LeetCode),
                &[Language::Java],
            )],
        )]);

        let detail =
            ProblemService::get_detail(&catalogue, "array", 1, Some(Language::Python), Language::Python)
                .unwrap();

        assert_eq!(detail.selected_language, Some(Language::Java));
        assert!(detail.language_fallback);
        assert_eq!(detail.solution.as_deref(), Some("// java solution for 1"));
        assert_eq!(detail.languages.len(), 1);
        assert!(detail.languages[0].selected);
    }

    #[test]
    fn test_unknown_problem_is_not_found() {
        let catalogue = catalogue(vec![]);
        assert!(matches!(
            ProblemService::get_detail(&catalogue, "array", 42, None, Language::Python),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            ProblemService::get_solution(&catalogue, 42, None, Language::Python),
            Err(AppError::NotFound(_))
        ));
    }
}
