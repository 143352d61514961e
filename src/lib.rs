//! DSA Tracker - Coding-Practice Problem Catalogue
//!
//! This library serves a static, curated catalogue of coding-practice
//! problems with their solutions in several languages.
//!
//! # Features
//!
//! - Landing overview with per-platform and per-category statistics
//! - Filtering by title search, difficulty, category and source platform
//! - Problem detail with example split and solution language fallback
//! - Plain-text solution endpoint for copying
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers returning view models
//! - **Services**: Filtering, aggregation and detail logic
//! - **Dataset**: Catalogue loading and validation
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
