//! Request types for the compensation modeling engine API.
//!
//! This module defines the JSON request structures for the modeling
//! endpoints. Benchmark-consuming requests can either name a specialty
//! from the loaded survey or carry inline benchmark points; inline points
//! win when both are present.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    BlendMode, BlendWeights, CallPayContext, CallTier, ConversionFactorModel, ForecastAssumptions,
    MarketBenchmarks, ProviderRecord,
};

/// Request body for the `/scenario` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Annual wRVUs produced.
    pub wrvus: Decimal,
    /// Clinical FTE, a fraction in `(0, 1]`.
    pub fte: Decimal,
    /// Base (fixed) annual compensation.
    pub base_pay: Decimal,
    /// The conversion factor model to evaluate.
    pub model: ConversionFactorModel,
    /// Specialty whose survey benchmarks should be used.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Inline benchmark points; overrides `specialty` when present.
    #[serde(default)]
    pub benchmarks: Option<MarketBenchmarks>,
}

/// Request body for the `/call-pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallPayRequest {
    /// The plan's call tiers.
    pub tiers: Vec<CallTier>,
    /// The coverage context.
    pub context: CallPayContext,
    /// Optional TCC reference for percent-of-TCC reporting.
    #[serde(default)]
    pub tcc_reference: Option<Decimal>,
}

/// Request body for the `/forecast` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// The plan's call tiers.
    pub tiers: Vec<CallTier>,
    /// The coverage context; its model year is the forecast base year.
    pub context: CallPayContext,
    /// Optional TCC reference for percent-of-TCC reporting.
    #[serde(default)]
    pub tcc_reference: Option<Decimal>,
    /// Growth assumptions for the projection.
    pub assumptions: ForecastAssumptions,
}

/// Request body for the `/benchmarks/blend` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendRequest {
    /// Raw provider records for empirical benchmarking.
    #[serde(default)]
    pub records: Vec<ProviderRecord>,
    /// Specialty whose survey benchmarks form the survey side.
    #[serde(default)]
    pub specialty: Option<String>,
    /// Inline survey points; overrides `specialty` when present.
    #[serde(default)]
    pub benchmarks: Option<MarketBenchmarks>,
    /// How the two sides are combined.
    pub mode: BlendMode,
    /// Per-point weights for blended mode.
    #[serde(default)]
    pub weights: Option<BlendWeights>,
    /// The plan year for the CF recommendation.
    pub model_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_scenario_request_with_specialty() {
        let json = r#"{
            "wrvus": "6000",
            "fte": "1.0",
            "base_pay": "0",
            "model": { "type": "single", "cf": "55" },
            "specialty": "family_medicine"
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.wrvus, Decimal::from_str("6000").unwrap());
        assert_eq!(request.specialty.as_deref(), Some("family_medicine"));
        assert!(request.benchmarks.is_none());
    }

    #[test]
    fn test_deserialize_scenario_request_with_inline_benchmarks() {
        let json = r#"{
            "wrvus": "6000",
            "fte": "1.0",
            "base_pay": "250000",
            "model": { "type": "budget_neutral", "target_tcc_percentile": "60" },
            "benchmarks": { "tcc_50": "400000", "tcc_75": "500000" }
        }"#;

        let request: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert!(request.specialty.is_none());
        let benchmarks = request.benchmarks.unwrap();
        assert!(benchmarks.tcc_50.is_some());
        assert!(benchmarks.wrvu_50.is_none());
    }

    #[test]
    fn test_deserialize_blend_request() {
        let json = r#"{
            "records": [
                { "wrvus": "5000", "tcc": "400000", "fte": "1" }
            ],
            "specialty": "family_medicine",
            "mode": "blended",
            "model_year": 2026
        }"#;

        let request: BlendRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.mode, BlendMode::Blended);
        assert!(request.weights.is_none());
    }

    #[test]
    fn test_deserialize_forecast_request() {
        let json = r#"{
            "tiers": [],
            "context": { "providers_on_call": 10, "rotation_ratio": "4", "model_year": 2026 },
            "assumptions": {
                "rate_increase_percent": "2.5",
                "provider_growth_percent": "5",
                "years": 3
            }
        }"#;

        let request: ForecastRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.context.providers_on_call, 10);
        assert_eq!(request.assumptions.years, 3);
        assert!(request.tcc_reference.is_none());
    }
}
