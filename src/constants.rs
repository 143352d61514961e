//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// CATALOGUE DEFAULTS
// =============================================================================

/// Catalogue bundled into the binary, used when no path is configured
pub const BUNDLED_CATALOGUE: &str = include_str!("../data/problems.json");

/// Language shown when a request does not name one
pub const DEFAULT_LANGUAGE: &str = "python";

/// Marker separating a problem statement from its worked example
pub const EXAMPLE_MARKER: &str = "Example:";

/// Maximum accepted length of a search term
pub const MAX_SEARCH_LENGTH: u64 = 200;

// =============================================================================
// SOURCE PLATFORMS
// =============================================================================

/// Source platform keys as used in query strings
pub mod platforms {
    pub const LEETCODE: &str = "leetcode";
    pub const GEEKSFORGEEKS: &str = "geeksforgeeks";
    pub const PRACTICE: &str = "practice";

    /// Filter option that clears the platform predicate
    pub const ALL: &str = "all";
}

// =============================================================================
// CATEGORY METADATA
// =============================================================================

/// Display metadata for the categories the landing page knows about
pub mod categories {
    /// (key, icon, description)
    pub const KNOWN: &[(&str, &str, &str)] = &[
        ("loop-pattern", "📊", "Master Loops Patterns"),
        ("functions", "📚", "Perform some functions Questions"),
        ("array", "📚", "Solve interesting problems"),
        ("strings", "🔤", "Explore string manipulation techniques"),
        ("linked-lists", "🔗", "Understand linear data structures"),
        ("trees", "🌳", "Solve hierarchical data structure problems"),
        ("graphs", "🕸️", "Tackle network and connectivity challenges"),
        ("dynamic-programming", "🧠", "Master optimization techniques"),
    ];

    pub const DEFAULT_ICON: &str = "📚";
    pub const DEFAULT_DESCRIPTION: &str = "Solve interesting problems";
}
