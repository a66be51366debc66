//! Scenario result models.
//!
//! This module contains the [`ScenarioResult`] type and its associated
//! structures that capture all outputs from a compensation scenario run,
//! including percentiles, incentive pay, alignment classification, and
//! data-quality warnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a provider's compensation percentile relates to their
/// productivity percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStatus {
    /// Compensation and productivity percentiles are within tolerance.
    Aligned,
    /// Compensation has drifted modestly from productivity.
    MildDrift,
    /// Compensation is materially out of line with productivity, or
    /// absolute compensation is high enough to dominate the comparison.
    RiskZone,
}

/// Fair-market-value review risk attached to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FmvRisk {
    /// No elevated review posture.
    Low,
    /// Compensation at or above the 75th percentile; document support.
    Moderate,
    /// Compensation above the 90th percentile; formal FMV review expected.
    High,
}

/// The combined alignment classification of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// The alignment status.
    pub status: AlignmentStatus,
    /// The FMV review risk.
    pub fmv_risk: FmvRisk,
}

/// A data-quality warning generated during a scenario run.
///
/// Warnings indicate that a documented numeric fallback was applied; they
/// never prevent the scenario from completing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete result of a compensation scenario run.
///
/// A derived record, not a source of truth: every field is recomputable
/// from the scenario inputs and benchmarks.
///
/// # Example
///
/// ```
/// use comp_engine::models::{AlignmentStatus, FmvRisk, ScenarioResult};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = ScenarioResult {
///     scenario_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     wrvu_percentile: Decimal::from(60),
///     tcc_percentile: Decimal::from(55),
///     cf_percentile: None,
///     effective_cf: Decimal::from(55),
///     incentive_pay: Decimal::from(30000),
///     modeled_tcc: Decimal::from(330000),
///     alignment_status: AlignmentStatus::Aligned,
///     fmv_risk: FmvRisk::Low,
///     warnings: vec![],
/// };
/// assert!(result.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Unique identifier for this scenario run.
    pub scenario_id: Uuid,
    /// When the scenario was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the scenario.
    pub engine_version: String,
    /// The provider's FTE-normalized wRVU market percentile.
    pub wrvu_percentile: Decimal,
    /// The modeled TCC's FTE-normalized market percentile.
    pub tcc_percentile: Decimal,
    /// The effective CF's market percentile, when CF benchmarks exist.
    pub cf_percentile: Option<Decimal>,
    /// The blended dollars-per-wRVU rate the model produced.
    pub effective_cf: Decimal,
    /// Incentive pay above (or, if negative, below) base pay.
    pub incentive_pay: Decimal,
    /// Modeled total cash compensation.
    pub modeled_tcc: Decimal,
    /// The alignment classification.
    pub alignment_status: AlignmentStatus,
    /// The FMV review risk classification.
    pub fmv_risk: FmvRisk,
    /// Data-quality warnings raised during the run.
    pub warnings: Vec<ScenarioWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> ScenarioResult {
        ScenarioResult {
            scenario_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "1.0.0".to_string(),
            wrvu_percentile: dec("66.67"),
            tcc_percentile: dec("58.2"),
            cf_percentile: Some(dec("48")),
            effective_cf: dec("55"),
            incentive_pay: dec("30000"),
            modeled_tcc: dec("330000"),
            alignment_status: AlignmentStatus::Aligned,
            fmv_risk: FmvRisk::Low,
            warnings: vec![],
        }
    }

    #[test]
    fn test_scenario_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"scenario_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"alignment_status\":\"aligned\""));
        assert!(json.contains("\"fmv_risk\":\"low\""));
        assert!(json.contains("\"modeled_tcc\":\"330000\""));
    }

    #[test]
    fn test_null_cf_percentile_round_trips() {
        let mut result = sample_result();
        result.cf_percentile = None;

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"cf_percentile\":null"));

        let back: ScenarioResult = serde_json::from_str(&json).unwrap();
        assert!(back.cf_percentile.is_none());
    }

    #[test]
    fn test_alignment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AlignmentStatus::MildDrift).unwrap(),
            "\"mild_drift\""
        );
        assert_eq!(
            serde_json::to_string(&AlignmentStatus::RiskZone).unwrap(),
            "\"risk_zone\""
        );
        assert_eq!(
            serde_json::to_string(&FmvRisk::Moderate).unwrap(),
            "\"moderate\""
        );
    }

    #[test]
    fn test_warning_fields() {
        let warning = ScenarioWarning {
            code: "LOW_CONFIDENCE_WRVU_PERCENTILE".to_string(),
            message: "wRVU benchmarks insufficient; neutral percentile applied".to_string(),
            severity: "low".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"LOW_CONFIDENCE_WRVU_PERCENTILE\""));
        assert!(json.contains("\"severity\":\"low\""));
    }
}
