//! Conversion factor plan models.
//!
//! This module defines the six-variant conversion factor model as an
//! explicit sum type with exhaustive dispatch, together with the tier
//! records the tiered variants are built from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the thresholds of a [`ConversionFactorModel::Tiered`] plan are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierBasis {
    /// Thresholds are absolute cumulative wRVU counts.
    Threshold,
    /// Thresholds are percentages of the provider's total wRVUs.
    Percentage,
}

/// One band of a threshold- or percentage-tiered plan.
///
/// The threshold is the band's *upper* boundary; the band begins where the
/// previous tier ended. A `None` threshold marks the final, unbounded band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompTier {
    /// Upper boundary of the band (wRVUs or percent, per the tier basis).
    #[serde(default)]
    pub threshold: Option<Decimal>,
    /// Dollars paid per wRVU falling inside this band.
    pub cf: Decimal,
}

/// One rate band of a percentile-tiered plan.
///
/// The tier covers productivity percentiles up to (but excluding) its
/// threshold; a `None` threshold marks the final, unbounded tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileTier {
    /// Upper percentile boundary of this tier.
    #[serde(default)]
    pub percentile_threshold: Option<Decimal>,
    /// Dollars paid per wRVU when this tier is selected.
    pub cf: Decimal,
}

/// One rate band of an FTE-adjusted plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FteTier {
    /// Inclusive lower FTE boundary.
    pub fte_min: Decimal,
    /// Exclusive upper FTE boundary; inclusive on the final tier,
    /// `None` for an unbounded final tier.
    #[serde(default)]
    pub fte_max: Option<Decimal>,
    /// Dollars paid per wRVU when this tier is selected.
    pub cf: Decimal,
}

/// The conversion factor model of a compensation plan.
///
/// A serializable tagged union: the `type` field selects the variant.
/// Immutable per call; every calculation dispatches exhaustively over the
/// six variants.
///
/// # Example
///
/// ```
/// use comp_engine::models::ConversionFactorModel;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"type": "single", "cf": "55"}"#;
/// let model: ConversionFactorModel = serde_json::from_str(json).unwrap();
/// assert_eq!(model, ConversionFactorModel::Single { cf: Decimal::from(55) });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionFactorModel {
    /// A flat dollar rate applied to every wRVU.
    Single {
        /// Dollars paid per wRVU.
        cf: Decimal,
    },
    /// Cumulative bands of wRVUs, each paid at its own rate.
    Tiered {
        /// Whether thresholds are absolute wRVUs or percentages of total.
        tier_basis: TierBasis,
        /// The ordered bands; the last band is unbounded.
        tiers: Vec<CompTier>,
    },
    /// A single rate selected by the provider's productivity percentile
    /// and applied to the full wRVU count.
    PercentileTiered {
        /// The ordered percentile tiers; the last tier is unbounded.
        tiers: Vec<PercentileTier>,
    },
    /// A rate solved so that modeled TCC lands on a target market
    /// percentile.
    BudgetNeutral {
        /// The TCC percentile the plan should pay at.
        target_tcc_percentile: Decimal,
        /// Fallback flat rate when the target cannot be resolved.
        #[serde(default)]
        base_cf: Option<Decimal>,
    },
    /// A base rate scaled by a quality performance score.
    QualityWeighted {
        /// The full rate paid at a perfect quality score.
        base_cf: Decimal,
        /// Quality score, either a 0–1 fraction or a 0–100 scale.
        quality_score: Decimal,
    },
    /// A flat rate selected by the provider's clinical FTE.
    FteAdjusted {
        /// The ordered FTE bands.
        tiers: Vec<FteTier>,
    },
}

impl ConversionFactorModel {
    /// Returns the wire name of the model variant, as used in error
    /// messages and serialized `type` tags.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Tiered { .. } => "tiered",
            Self::PercentileTiered { .. } => "percentile_tiered",
            Self::BudgetNeutral { .. } => "budget_neutral",
            Self::QualityWeighted { .. } => "quality_weighted",
            Self::FteAdjusted { .. } => "fte_adjusted",
        }
    }

    /// Returns true if this variant cannot be evaluated without market
    /// benchmarks.
    pub fn requires_benchmarks(&self) -> bool {
        matches!(
            self,
            Self::PercentileTiered { .. } | Self::BudgetNeutral { .. }
        )
    }
}
