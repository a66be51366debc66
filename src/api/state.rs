//! Application state for the compensation modeling engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::SurveyLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded market survey data.
#[derive(Clone)]
pub struct AppState {
    /// The loaded survey benchmarks.
    surveys: Arc<SurveyLoader>,
}

impl AppState {
    /// Creates a new application state with the given survey loader.
    pub fn new(surveys: SurveyLoader) -> Self {
        Self {
            surveys: Arc::new(surveys),
        }
    }

    /// Returns a reference to the survey loader.
    pub fn surveys(&self) -> &SurveyLoader {
        &self.surveys
    }
}
