//! Human-readable conversion factor plan summaries.
//!
//! Pure, stateless string builders that render any model variant's
//! configuration for plan listings and exports. Output formats are part of
//! the engine's contract and covered byte-for-byte by tests.

use rust_decimal::Decimal;

use crate::models::{ConversionFactorModel, TierBasis};

use super::conversion_factor::DEFAULT_FALLBACK_CF;

const ONE_THOUSAND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Renders a one-line summary of a conversion factor model.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::model_summary;
/// use comp_engine::models::ConversionFactorModel;
/// use rust_decimal::Decimal;
///
/// let model = ConversionFactorModel::Single { cf: Decimal::from(55) };
/// assert_eq!(model_summary(&model), "Flat $55/wRVU");
/// ```
pub fn model_summary(model: &ConversionFactorModel) -> String {
    match model {
        ConversionFactorModel::Single { cf } => format!("Flat {}", rate(*cf)),
        ConversionFactorModel::Tiered { tier_basis, tiers } => {
            let label = match tier_basis {
                TierBasis::Threshold => "Tiered (wRVU thresholds)",
                TierBasis::Percentage => "Tiered (% of wRVUs)",
            };
            if tiers.is_empty() {
                return format!("{}: no tiers", label);
            }

            let mut segments = Vec::with_capacity(tiers.len());
            let mut previous: Option<Decimal> = None;
            for tier in tiers {
                let range = match (previous, tier.threshold) {
                    (None, Some(end)) => format!("0-{}", bound(end, *tier_basis)),
                    (Some(start), Some(end)) => {
                        format!("{}-{}", bound(start, *tier_basis), bound(end, *tier_basis))
                    }
                    (Some(start), None) => format!("{}+", bound(start, *tier_basis)),
                    (None, None) => "all wRVUs".to_string(),
                };
                segments.push(format!("{} @ {}", range, rate(tier.cf)));
                previous = tier.threshold;
            }
            format!("{}: {}", label, segments.join(", "))
        }
        ConversionFactorModel::PercentileTiered { tiers } => {
            if tiers.is_empty() {
                return "Percentile-tiered: no tiers".to_string();
            }

            let mut segments = Vec::with_capacity(tiers.len());
            let mut previous: Option<Decimal> = None;
            for tier in tiers {
                let range = match (previous, tier.percentile_threshold) {
                    (None, Some(end)) => format!("<{}", ordinal(end)),
                    (Some(start), Some(end)) => format!("{}-{}", ordinal(start), ordinal(end)),
                    (Some(start), None) => format!("{}+", ordinal(start)),
                    (None, None) => "all percentiles".to_string(),
                };
                segments.push(format!("{} @ {}", range, rate(tier.cf)));
                previous = tier.percentile_threshold;
            }
            format!("Percentile-tiered: {}", segments.join(", "))
        }
        ConversionFactorModel::BudgetNeutral {
            target_tcc_percentile,
            base_cf,
        } => format!(
            "Budget-neutral at {} percentile TCC (fallback {})",
            ordinal(*target_tcc_percentile),
            rate(base_cf.unwrap_or(DEFAULT_FALLBACK_CF)),
        ),
        ConversionFactorModel::QualityWeighted {
            base_cf,
            quality_score,
        } => {
            let factor = if *quality_score > Decimal::ONE {
                *quality_score / ONE_HUNDRED
            } else {
                *quality_score
            }
            .clamp(Decimal::ZERO, Decimal::ONE);
            format!(
                "Quality-weighted: {} base at {}% quality ({} effective)",
                rate(*base_cf),
                (factor * ONE_HUNDRED).normalize(),
                rate(*base_cf * factor),
            )
        }
        ConversionFactorModel::FteAdjusted { tiers } => {
            if tiers.is_empty() {
                return "FTE-adjusted: no tiers".to_string();
            }

            let segments: Vec<String> = tiers
                .iter()
                .map(|tier| {
                    let range = match tier.fte_max {
                        Some(max) => {
                            format!("{}-{} FTE", tier.fte_min.normalize(), max.normalize())
                        }
                        None => format!("{}+ FTE", tier.fte_min.normalize()),
                    };
                    format!("{} @ {}", range, rate(tier.cf))
                })
                .collect();
            format!("FTE-adjusted: {}", segments.join(", "))
        }
    }
}

/// Formats a dollars-per-wRVU rate, e.g. `$55/wRVU`.
fn rate(cf: Decimal) -> String {
    format!("${}/wRVU", cf.normalize())
}

/// Abbreviates a tier boundary, collapsing thousands: 4000 becomes `4K`,
/// 4500 becomes `4.5K`. Percentage-basis boundaries keep their `%` suffix.
fn bound(value: Decimal, basis: TierBasis) -> String {
    match basis {
        TierBasis::Threshold => abbreviate_thousands(value),
        TierBasis::Percentage => format!("{}%", value.normalize()),
    }
}

fn abbreviate_thousands(value: Decimal) -> String {
    if value.abs() >= ONE_THOUSAND {
        format!("{}K", (value / ONE_THOUSAND).normalize())
    } else {
        value.normalize().to_string()
    }
}

/// Formats a percentile rank as an ordinal: `25th`, `61st`, `72nd`.
///
/// Fractional ranks take the `th` suffix.
fn ordinal(percentile: Decimal) -> String {
    let normalized = percentile.normalize();
    if normalized.fract() != Decimal::ZERO {
        return format!("{}th", normalized);
    }

    let last_two = (normalized.abs() % Decimal::from(100)).mantissa();
    let last_one = last_two % 10;
    let suffix = match (last_two, last_one) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", normalized, suffix)
}
