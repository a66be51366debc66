//! Market benchmark models and related types.
//!
//! This module defines the sparse survey benchmark record, the percentile
//! curve view used by the interpolator, and the types produced by internal
//! (empirical) benchmarking and survey blending.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four standard survey percentile ranks, in ascending order.
pub const BENCHMARK_RANKS: [u32; 4] = [25, 50, 75, 90];

/// A sparse record of market survey benchmarks for one specialty.
///
/// Any subset of the twelve points may be absent. Values *should* be
/// non-decreasing by percentile rank but this is not enforced; the
/// calculation layer degrades gracefully on inconsistent data.
///
/// # Example
///
/// ```
/// use comp_engine::models::MarketBenchmarks;
/// use rust_decimal::Decimal;
///
/// let benchmarks = MarketBenchmarks {
///     wrvu_25: Some(Decimal::from(4000)),
///     wrvu_50: Some(Decimal::from(5000)),
///     ..MarketBenchmarks::default()
/// };
/// assert!(benchmarks.tcc_curve().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketBenchmarks {
    /// 25th percentile annual wRVUs.
    #[serde(default)]
    pub wrvu_25: Option<Decimal>,
    /// 50th percentile annual wRVUs.
    #[serde(default)]
    pub wrvu_50: Option<Decimal>,
    /// 75th percentile annual wRVUs.
    #[serde(default)]
    pub wrvu_75: Option<Decimal>,
    /// 90th percentile annual wRVUs.
    #[serde(default)]
    pub wrvu_90: Option<Decimal>,
    /// 25th percentile total cash compensation.
    #[serde(default)]
    pub tcc_25: Option<Decimal>,
    /// 50th percentile total cash compensation.
    #[serde(default)]
    pub tcc_50: Option<Decimal>,
    /// 75th percentile total cash compensation.
    #[serde(default)]
    pub tcc_75: Option<Decimal>,
    /// 90th percentile total cash compensation.
    #[serde(default)]
    pub tcc_90: Option<Decimal>,
    /// 25th percentile conversion factor ($/wRVU).
    #[serde(default)]
    pub cf_25: Option<Decimal>,
    /// 50th percentile conversion factor ($/wRVU).
    #[serde(default)]
    pub cf_50: Option<Decimal>,
    /// 75th percentile conversion factor ($/wRVU).
    #[serde(default)]
    pub cf_75: Option<Decimal>,
    /// 90th percentile conversion factor ($/wRVU).
    #[serde(default)]
    pub cf_90: Option<Decimal>,
}

impl MarketBenchmarks {
    /// Returns the wRVU benchmark points as a percentile curve.
    pub fn wrvu_curve(&self) -> PercentileCurve {
        PercentileCurve {
            p25: self.wrvu_25,
            p50: self.wrvu_50,
            p75: self.wrvu_75,
            p90: self.wrvu_90,
        }
    }

    /// Returns the TCC benchmark points as a percentile curve.
    pub fn tcc_curve(&self) -> PercentileCurve {
        PercentileCurve {
            p25: self.tcc_25,
            p50: self.tcc_50,
            p75: self.tcc_75,
            p90: self.tcc_90,
        }
    }

    /// Returns the conversion factor benchmark points as a percentile curve.
    pub fn cf_curve(&self) -> PercentileCurve {
        PercentileCurve {
            p25: self.cf_25,
            p50: self.cf_50,
            p75: self.cf_75,
            p90: self.cf_90,
        }
    }
}

/// The four optional benchmark points for a single metric, viewed as a
/// sparse piecewise-linear percentile curve.
///
/// This is the unit the percentile interpolator works against. Any survey
/// metric (wRVUs, TCC, conversion factors, call-pay rates) can be expressed
/// as a curve, so interpolation is written once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileCurve {
    /// Value at the 25th percentile, if surveyed.
    #[serde(default)]
    pub p25: Option<Decimal>,
    /// Value at the 50th percentile, if surveyed.
    #[serde(default)]
    pub p50: Option<Decimal>,
    /// Value at the 75th percentile, if surveyed.
    #[serde(default)]
    pub p75: Option<Decimal>,
    /// Value at the 90th percentile, if surveyed.
    #[serde(default)]
    pub p90: Option<Decimal>,
}

impl PercentileCurve {
    /// Builds a curve from four known points.
    pub fn new(p25: Decimal, p50: Decimal, p75: Decimal, p90: Decimal) -> Self {
        Self {
            p25: Some(p25),
            p50: Some(p50),
            p75: Some(p75),
            p90: Some(p90),
        }
    }

    /// Returns the available `(rank, value)` points in ascending rank order.
    pub fn available(&self) -> Vec<(Decimal, Decimal)> {
        let points = [
            (Decimal::from(25), self.p25),
            (Decimal::from(50), self.p50),
            (Decimal::from(75), self.p75),
            (Decimal::from(90), self.p90),
        ];
        points
            .into_iter()
            .filter_map(|(rank, value)| value.map(|v| (rank, v)))
            .collect()
    }

    /// Returns true if no benchmark point is present.
    pub fn is_empty(&self) -> bool {
        self.p25.is_none() && self.p50.is_none() && self.p75.is_none() && self.p90.is_none()
    }
}

/// Empirical percentiles computed from an organization's own provider
/// records, FTE-normalized.
///
/// Unlike [`MarketBenchmarks`], all eight points are always present: they
/// are order statistics of the input sample rather than survey data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalPercentiles {
    /// 25th percentile of FTE-normalized wRVUs.
    pub wrvu_25: Decimal,
    /// 50th percentile of FTE-normalized wRVUs.
    pub wrvu_50: Decimal,
    /// 75th percentile of FTE-normalized wRVUs.
    pub wrvu_75: Decimal,
    /// 90th percentile of FTE-normalized wRVUs.
    pub wrvu_90: Decimal,
    /// 25th percentile of FTE-normalized TCC.
    pub tcc_25: Decimal,
    /// 50th percentile of FTE-normalized TCC.
    pub tcc_50: Decimal,
    /// 75th percentile of FTE-normalized TCC.
    pub tcc_75: Decimal,
    /// 90th percentile of FTE-normalized TCC.
    pub tcc_90: Decimal,
    /// Number of provider records the percentiles were computed from.
    pub sample_size: usize,
}

/// How internal and survey benchmarks are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Use survey data unchanged.
    SurveyOnly,
    /// Use internal empirical percentiles unchanged.
    InternalOnly,
    /// Weighted mean of survey and internal values per percentile point.
    Blended,
}

/// Weights applied per percentile point in [`BlendMode::Blended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendWeights {
    /// Weight given to the survey value.
    pub survey: Decimal,
    /// Weight given to the internal value.
    pub internal: Decimal,
}

impl Default for BlendWeights {
    /// Equal weighting of survey and internal data.
    fn default() -> Self {
        Self {
            survey: Decimal::new(5, 1),
            internal: Decimal::new(5, 1),
        }
    }
}

/// A conversion factor range recommended from blended benchmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CfRecommendation {
    /// Lower bound of the recommended CF range.
    pub min_cf: Decimal,
    /// Upper bound of the recommended CF range.
    pub max_cf: Decimal,
    /// The median (anchor) CF.
    pub median_cf: Decimal,
    /// The plan year the recommendation was produced for.
    pub model_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_curve_available_skips_missing_points() {
        let curve = PercentileCurve {
            p25: Some(dec("4000")),
            p50: None,
            p75: Some(dec("6500")),
            p90: None,
        };

        let available = curve.available();
        assert_eq!(available.len(), 2);
        assert_eq!(available[0], (dec("25"), dec("4000")));
        assert_eq!(available[1], (dec("75"), dec("6500")));
    }

    #[test]
    fn test_empty_curve() {
        let curve = PercentileCurve::default();
        assert!(curve.is_empty());
        assert!(curve.available().is_empty());
    }

    #[test]
    fn test_market_benchmarks_curve_accessors() {
        let benchmarks = MarketBenchmarks {
            wrvu_25: Some(dec("4000")),
            wrvu_90: Some(dec("8000")),
            tcc_50: Some(dec("400000")),
            ..MarketBenchmarks::default()
        };

        assert_eq!(benchmarks.wrvu_curve().available().len(), 2);
        assert_eq!(benchmarks.tcc_curve().available().len(), 1);
        assert!(benchmarks.cf_curve().is_empty());
    }

    #[test]
    fn test_sparse_benchmarks_deserialize_missing_fields_as_none() {
        let json = r#"{
            "wrvu_50": "5000",
            "tcc_50": "400000"
        }"#;

        let benchmarks: MarketBenchmarks = serde_json::from_str(json).unwrap();
        assert_eq!(benchmarks.wrvu_50, Some(dec("5000")));
        assert!(benchmarks.wrvu_25.is_none());
        assert!(benchmarks.cf_90.is_none());
    }

    #[test]
    fn test_default_blend_weights_are_equal() {
        let weights = BlendWeights::default();
        assert_eq!(weights.survey, dec("0.5"));
        assert_eq!(weights.internal, dec("0.5"));
    }

    #[test]
    fn test_blend_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&BlendMode::SurveyOnly).unwrap(),
            "\"survey_only\""
        );
        assert_eq!(
            serde_json::to_string(&BlendMode::Blended).unwrap(),
            "\"blended\""
        );
    }
}
