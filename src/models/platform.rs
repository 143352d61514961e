//! Source platform model

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Difficulty;
use crate::constants::platforms;

/// The site a problem was taken from
///
/// Equality and hashing go by `key()`, so `Other` names compare ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourcePlatform {
    LeetCode,
    GeeksforGeeks,
    Practice,
    /// Any other site, keeping its name as written in the dataset
    Other(String),
}

impl SourcePlatform {
    /// Platforms offered as filter options, in display order
    pub const KNOWN: &'static [SourcePlatform] =
        &[Self::LeetCode, Self::GeeksforGeeks, Self::Practice];

    /// Lowercase identifier used in query strings and stats
    pub fn key(&self) -> String {
        match self {
            Self::LeetCode => platforms::LEETCODE.to_string(),
            Self::GeeksforGeeks => platforms::GEEKSFORGEEKS.to_string(),
            Self::Practice => platforms::PRACTICE.to_string(),
            Self::Other(name) => name.trim().to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::LeetCode => "LeetCode",
            Self::GeeksforGeeks => "GeeksforGeeks",
            Self::Practice => "Practice",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Difficulty levels this platform grades problems with
    pub fn difficulties(&self) -> &'static [Difficulty] {
        match self {
            Self::GeeksforGeeks => Difficulty::ALL,
            _ => Difficulty::STANDARD,
        }
    }

    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        self.difficulties().contains(&difficulty)
    }

    /// Parse a query-string value. Empty and `all` mean "no platform".
    pub fn from_query(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(platforms::ALL) {
            None
        } else {
            Some(Self::from(value.to_string()))
        }
    }
}

impl PartialEq for SourcePlatform {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SourcePlatform {}

impl Hash for SourcePlatform {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<String> for SourcePlatform {
    fn from(name: String) -> Self {
        match name.trim().to_lowercase().as_str() {
            platforms::LEETCODE => Self::LeetCode,
            platforms::GEEKSFORGEEKS | "gfg" | "geeks for geeks" => Self::GeeksforGeeks,
            platforms::PRACTICE => Self::Practice,
            _ => Self::Other(name.trim().to_string()),
        }
    }
}

impl From<SourcePlatform> for String {
    fn from(platform: SourcePlatform) -> Self {
        platform.label().to_string()
    }
}

impl std::fmt::Display for SourcePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_names_are_case_insensitive() {
        assert_eq!(SourcePlatform::from("LeetCode".to_string()), SourcePlatform::LeetCode);
        assert_eq!(SourcePlatform::from("leetcode".to_string()), SourcePlatform::LeetCode);
        assert_eq!(SourcePlatform::from("GFG".to_string()), SourcePlatform::GeeksforGeeks);
        assert_eq!(
            SourcePlatform::from("Codeforces".to_string()),
            SourcePlatform::Other("Codeforces".to_string())
        );
    }

    #[test]
    fn test_other_platform_key_matches_query() {
        let platform = SourcePlatform::from("Codeforces".to_string());
        assert_eq!(platform.key(), "codeforces");
        assert_eq!(SourcePlatform::from_query("codeforces"), Some(platform.clone()));
        assert_eq!(SourcePlatform::from_query(" CODEFORCES "), Some(platform));
    }

    #[test]
    fn test_other_platforms_hash_by_key() {
        use std::collections::HashSet;

        let set: HashSet<SourcePlatform> = ["Codeforces", "codeforces", "CodeForces"]
            .into_iter()
            .map(|name| SourcePlatform::from(name.to_string()))
            .collect();
        assert_eq!(set.len(), 1);
        assert_ne!(
            SourcePlatform::from("Codeforces".to_string()),
            SourcePlatform::from("AtCoder".to_string())
        );
    }

    #[test]
    fn test_all_clears_platform() {
        assert_eq!(SourcePlatform::from_query("all"), None);
        assert_eq!(SourcePlatform::from_query(""), None);
        assert_eq!(
            SourcePlatform::from_query("practice"),
            Some(SourcePlatform::Practice)
        );
    }

    #[test]
    fn test_difficulty_sets() {
        assert!(SourcePlatform::GeeksforGeeks.accepts(Difficulty::School));
        assert!(!SourcePlatform::LeetCode.accepts(Difficulty::Basic));
        assert!(SourcePlatform::Practice.accepts(Difficulty::Hard));
    }
}
