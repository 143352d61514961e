//! Test utilities: fixture problems and catalogues

use std::collections::BTreeMap;

use crate::{
    config::Config,
    models::{Catalogue, Category, Difficulty, Language, Problem, SourcePlatform},
    state::AppState,
};

/// A problem with a single Python solution; the category is set by [`catalogue`]
pub fn problem(id: u64, title: &str, difficulty: Difficulty, source: SourcePlatform) -> Problem {
    with_solutions(
        Problem {
            id,
            title: title.to_string(),
            description: format!("Description of {}", title),
            difficulty,
            category: String::new(),
            source,
            solved: false,
            solutions: BTreeMap::new(),
            time_complexity: None,
            space_complexity: None,
            notes: None,
        },
        &[Language::Python],
    )
}

/// Replace a problem's solutions with one stub per language
pub fn with_solutions(mut problem: Problem, languages: &[Language]) -> Problem {
    problem.solutions = languages
        .iter()
        .map(|lang| (*lang, format!("// {} solution for {}", lang, problem.id)))
        .collect();
    problem
}

pub fn solved(mut problem: Problem) -> Problem {
    problem.solved = true;
    problem
}

/// Build a catalogue, filing each problem under its category
pub fn catalogue(categories: Vec<(&str, Vec<Problem>)>) -> Catalogue {
    Catalogue::new(
        categories
            .into_iter()
            .map(|(name, problems)| {
                let problems = problems
                    .into_iter()
                    .map(|mut p| {
                        p.category = name.to_string();
                        p
                    })
                    .collect();
                Category::new(name, problems)
            })
            .collect(),
    )
}

/// Application state over a small fixed catalogue
pub fn test_state() -> AppState {
    let mut two_sum = with_solutions(
        problem(1, "Two Sum", Difficulty::Easy, SourcePlatform::LeetCode),
        &[Language::Python, Language::Java],
    );
    two_sum.description =
        "Find two numbers adding to a target. Example: nums = [2,7], target = 9 -> [0,1]".to_string();
    two_sum.time_complexity = Some("O(n)".to_string());
    two_sum.space_complexity = Some("O(n)".to_string());

    let catalogue = catalogue(vec![
        (
            "Array",
            vec![
                solved(two_sum),
                problem(2, "Array Rotation", Difficulty::Basic, SourcePlatform::GeeksforGeeks),
            ],
        ),
        (
            "Linked Lists",
            vec![
                problem(3, "Reverse List", Difficulty::Easy, SourcePlatform::LeetCode),
                problem(4, "Merge k Sorted Lists", Difficulty::Hard, SourcePlatform::LeetCode),
                problem(5, "Two Pointers", Difficulty::Medium, SourcePlatform::Practice),
            ],
        ),
    ]);

    AppState::new(catalogue, Config::default())
}
