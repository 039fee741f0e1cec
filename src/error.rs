//! # Error Types
//!
//! This module defines error types used throughout the tabula library.
//!
//! Only structural problems are reported. Invalid props are normalized
//! silently at construction, and drawing failures belong to the provider.

use thiserror::Error;

/// Main error type for tabula operations
#[derive(Debug, Error)]
pub enum TabulaError {
    /// A config-dependent value was queried before `set_config` reached the component
    #[error("Config not set: {component} needs a config before it can be sized or rendered")]
    ConfigNotSet {
        /// Component kind that was queried (e.g. "col", "row")
        component: &'static str,
    },

    /// A header or footer does not fit in the page content area
    #[error("{section} height {height} exceeds the available page height {available}")]
    SectionTooTall {
        section: &'static str,
        height: f64,
        available: f64,
    },

    /// Structure export failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TabulaError {
    pub(crate) fn config_not_set(component: &'static str) -> Self {
        Self::ConfigNotSet { component }
    }
}

/// Result alias for tabula operations.
pub type Result<T> = std::result::Result<T, TabulaError>;
