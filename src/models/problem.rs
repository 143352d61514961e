//! Problem model

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Language, SourcePlatform};

/// A catalogue problem with its per-language solutions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: u64,
    pub title: String,
    /// Statement text, possibly followed by an `Example:` section
    pub description: String,
    pub difficulty: Difficulty,
    /// Name of the owning category
    pub category: String,
    pub source: SourcePlatform,
    /// Display-only; never written by the service
    pub solved: bool,
    pub solutions: BTreeMap<Language, String>,
    pub time_complexity: Option<String>,
    pub space_complexity: Option<String>,
    pub notes: Option<String>,
}

impl Problem {
    /// Solution source text for a language, if the problem has one
    pub fn solution(&self, language: Language) -> Option<&str> {
        self.solutions.get(&language).map(String::as_str)
    }

    /// Languages with a solution, in fallback priority order
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.solutions.keys().copied()
    }
}

/// Problem difficulty levels
///
/// `School` and `Basic` only exist on GeeksforGeeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    School,
    Basic,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The three levels shared by every platform
    pub const STANDARD: &'static [Difficulty] = &[Self::Easy, Self::Medium, Self::Hard];

    /// Every level, including the GeeksforGeeks-only ones
    pub const ALL: &'static [Difficulty] = &[
        Self::School,
        Self::Basic,
        Self::Easy,
        Self::Medium,
        Self::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Basic => "Basic",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "school" => Ok(Self::School),
            "basic" => Ok(Self::Basic),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}
