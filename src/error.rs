//! Error types for the compensation modeling engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during compensation modeling.

use thiserror::Error;

/// The main error type for the compensation modeling engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use comp_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Specialty code was not found in the loaded survey data.
    #[error("Specialty not found: {code}")]
    SpecialtyNotFound {
        /// The specialty code that was not found.
        code: String,
    },

    /// A conversion factor model that requires market benchmarks was
    /// invoked without them.
    #[error("Conversion factor model '{model}' requires market benchmarks")]
    MissingBenchmarks {
        /// The name of the model variant that required benchmarks.
        model: String,
    },

    /// A scenario input was invalid or contained inconsistent data.
    #[error("Invalid scenario field '{field}': {message}")]
    InvalidScenario {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
