//! Supported solution languages

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language solutions can be displayed in
///
/// Declaration order is the fallback priority order, so the derived `Ord`
/// sorts solution maps by preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Java,
    Cpp,
    C,
    TypeScript,
    Go,
    Rust,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Self::Python,
        Self::JavaScript,
        Self::Java,
        Self::Cpp,
        Self::C,
        Self::TypeScript,
        Self::Go,
        Self::Rust,
    ];

    /// Identifier used in the dataset and in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::TypeScript => "typescript",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::TypeScript => "TypeScript",
            Self::Go => "Go",
            Self::Rust => "Rust",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Python => "🐍",
            Self::JavaScript => "✨",
            Self::Java => "☕",
            Self::Cpp => "⚙️",
            Self::C => "🔧",
            Self::TypeScript => "🔷",
            Self::Go => "🐹",
            Self::Rust => "🦀",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "java" => Ok(Self::Java),
            "cpp" | "c++" => Ok(Self::Cpp),
            "c" => Ok(Self::C),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "go" | "golang" => Ok(Self::Go),
            "rust" => Ok(Self::Rust),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}
