//! Input validation utilities

use crate::{
    error::{AppError, AppResult},
    models::{Difficulty, Language},
};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitize a search term; blank terms become `None`
pub fn sanitize_search(input: &str) -> Option<String> {
    let term = sanitize_string(input);
    (!term.is_empty()).then_some(term)
}

/// Parse an optional difficulty query value; blank means unset
pub fn parse_difficulty(value: Option<&str>) -> AppResult<Option<Difficulty>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(AppError::InvalidInput),
    }
}

/// Parse an optional language query value; blank means unset
pub fn parse_language(value: Option<&str>) -> AppResult<Option<Language>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(AppError::InvalidInput),
    }
}

/// Parse a problem id path segment; anything but a non-negative integer is unknown
pub fn parse_problem_id(value: &str) -> AppResult<u64> {
    value.trim().parse().map_err(|_| {
        tracing::warn!(id = %value, "Malformed problem id");
        AppError::NotFound("Problem not found".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_search() {
        assert_eq!(sanitize_search("  two\u{0007} "), Some("two".to_string()));
        assert_eq!(sanitize_search(" \t "), None);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty(None).unwrap(), None);
        assert_eq!(parse_difficulty(Some("")).unwrap(), None);
        assert_eq!(parse_difficulty(Some("EASY")).unwrap(), Some(Difficulty::Easy));
        assert!(matches!(
            parse_difficulty(Some("legendary")),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(parse_language(Some("js")).unwrap(), Some(Language::JavaScript));
        assert_eq!(parse_language(Some(" ")).unwrap(), None);
        assert!(parse_language(Some("cobol")).is_err());
    }

    #[test]
    fn test_parse_problem_id() {
        assert_eq!(parse_problem_id("42").unwrap(), 42);
        assert!(matches!(parse_problem_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_problem_id("-1"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_problem_id(""), Err(AppError::NotFound(_))));
    }
}
