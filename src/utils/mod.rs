//! Utility functions

pub mod validation;

pub use validation::{
    parse_difficulty, parse_language, parse_problem_id, sanitize_search, sanitize_string,
};
