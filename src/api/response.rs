//! Response types for the compensation modeling engine API.
//!
//! This module defines the composite response bodies and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    CallPayImpact, CfRecommendation, InternalPercentiles, MarketBenchmarks, MultiYearForecast,
};

/// Response body for the `/forecast` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// The base-year call-pay impact the forecast was built from.
    pub impact: CallPayImpact,
    /// The multi-year projection.
    pub forecast: MultiYearForecast,
}

/// Response body for the `/benchmarks/blend` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendResponse {
    /// Empirical percentiles from the submitted records, if any were usable.
    pub internal: Option<InternalPercentiles>,
    /// The blended benchmarks, substitutable for survey data.
    pub blended: MarketBenchmarks,
    /// The CF recommendation derived from the blended benchmarks.
    pub recommendation: Option<CfRecommendation>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a specialty not found error response.
    pub fn specialty_not_found(code: &str) -> Self {
        Self::with_details(
            "SPECIALTY_NOT_FOUND",
            format!("Specialty not found: {}", code),
            format!("The specialty code '{}' is not in the loaded survey", code),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::SpecialtyNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::specialty_not_found(&code),
            },
            EngineError::MissingBenchmarks { model } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_BENCHMARKS",
                    format!("Conversion factor model '{}' requires market benchmarks", model),
                    "Provide inline benchmarks or name a specialty from the loaded survey",
                ),
            },
            EngineError::InvalidScenario { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCENARIO",
                    format!("Invalid scenario field '{}': {}", field, message),
                    "The scenario inputs contain invalid information",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    message,
                ),
            },
        }
    }
}
