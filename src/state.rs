//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    config::Config,
    dataset,
    error::AppResult,
    models::Catalogue,
    services::{AggregateService, Overview},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Immutable problem catalogue
    catalogue: Catalogue,

    /// Landing-page statistics, aggregated once
    overview: Overview,

    /// When the catalogue was loaded
    loaded_at: DateTime<Utc>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state around a loaded catalogue
    pub fn new(catalogue: Catalogue, config: Config) -> Self {
        let overview = AggregateService::aggregate(&catalogue);
        Self {
            inner: Arc::new(AppStateInner {
                catalogue,
                overview,
                loaded_at: Utc::now(),
                config,
            }),
        }
    }

    /// Load the configured catalogue and build the state
    pub fn load(config: Config) -> AppResult<Self> {
        let catalogue = dataset::load(config.catalogue.path.as_deref())?;
        Ok(Self::new(catalogue, config))
    }

    /// Get a reference to the catalogue
    pub fn catalogue(&self) -> &Catalogue {
        &self.inner.catalogue
    }

    /// Get a reference to the cached overview
    pub fn overview(&self) -> &Overview {
        &self.inner.overview
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.inner.loaded_at
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
