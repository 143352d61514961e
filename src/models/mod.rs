//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod catalogue;
pub mod category;
pub mod language;
pub mod platform;
pub mod problem;

pub use catalogue::*;
pub use category::*;
pub use language::*;
pub use platform::*;
pub use problem::*;
