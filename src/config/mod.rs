//! Configuration loading and management for the compensation modeling
//! engine.
//!
//! This module provides functionality to load market survey benchmarks
//! from YAML files, including survey metadata and per-specialty benchmark
//! points.
//!
//! # Example
//!
//! ```no_run
//! use comp_engine::config::SurveyLoader;
//!
//! let loader = SurveyLoader::load("./config/surveys").unwrap();
//! println!("Loaded survey: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::SurveyLoader;
pub use types::{SpecialtyBenchmarks, SurveyMetadata};
