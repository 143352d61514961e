//! Catalogue dataset
//!
//! This module owns loading the static problem catalogue, once, at startup.

pub mod loader;

pub use loader::{load_from_path, load_from_str, CatalogueError};

use std::path::Path;

use crate::{constants::BUNDLED_CATALOGUE, models::Catalogue};

/// Load the configured catalogue, or the bundled one when no path is set
pub fn load(path: Option<&Path>) -> Result<Catalogue, CatalogueError> {
    match path {
        Some(path) => load_from_path(path),
        None => {
            tracing::info!("Loading bundled catalogue");
            load_from_str(BUNDLED_CATALOGUE)
        }
    }
}
