//! Conversion factor engine.
//!
//! This module evaluates the six conversion factor model variants against a
//! provider's production, producing the derived wRVU compensation and the
//! signed incentive above (or below) base pay.
//!
//! ## Variant semantics
//!
//! Two structurally similar variants differ deliberately and must not be
//! unified:
//! - **Tiered** *partitions* wRVUs across cumulative bands, paying each band
//!   at its own rate.
//! - **PercentileTiered** *selects* a single rate from the provider's
//!   productivity percentile and applies it to the full wRVU count.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompTier, ConversionFactorModel, FteTier, MarketBenchmarks, PercentileTier, TierBasis,
};

use super::percentile::{percentile_of, value_at_percentile};

/// Flat rate used when a budget-neutral target cannot be resolved and the
/// plan supplies no explicit fallback.
pub const DEFAULT_FALLBACK_CF: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes the wRVU-derived compensation for a model.
///
/// This is the gross dollars the model attributes to the provider's
/// production; [`incentive_pay`] subtracts base pay from it.
///
/// # Errors
///
/// Returns [`EngineError::MissingBenchmarks`] when a `PercentileTiered` or
/// `BudgetNeutral` model is evaluated without market benchmarks. All other
/// degraded inputs (empty tier lists, unordered thresholds, unresolvable
/// targets) fall back to documented defaults instead of erroring.
pub fn derived_compensation(
    wrvus: Decimal,
    model: &ConversionFactorModel,
    base_pay: Decimal,
    fte: Decimal,
    benchmarks: Option<&MarketBenchmarks>,
) -> EngineResult<Decimal> {
    match model {
        ConversionFactorModel::Single { cf } => Ok(wrvus * *cf),
        ConversionFactorModel::Tiered { tier_basis, tiers } => {
            Ok(tiered_compensation(wrvus, *tier_basis, tiers))
        }
        ConversionFactorModel::PercentileTiered { tiers } => {
            let benchmarks = benchmarks.ok_or_else(|| EngineError::MissingBenchmarks {
                model: model.variant_name().to_string(),
            })?;
            Ok(percentile_tiered_compensation(wrvus, fte, tiers, benchmarks))
        }
        ConversionFactorModel::BudgetNeutral {
            target_tcc_percentile,
            base_cf,
        } => {
            let benchmarks = benchmarks.ok_or_else(|| EngineError::MissingBenchmarks {
                model: model.variant_name().to_string(),
            })?;
            Ok(budget_neutral_compensation(
                wrvus,
                fte,
                base_pay,
                *target_tcc_percentile,
                *base_cf,
                benchmarks,
            ))
        }
        ConversionFactorModel::QualityWeighted {
            base_cf,
            quality_score,
        } => Ok(wrvus * quality_weighted_cf(*base_cf, *quality_score)),
        ConversionFactorModel::FteAdjusted { tiers } => {
            Ok(wrvus * fte_adjusted_cf(fte, tiers))
        }
    }
}

/// Computes the signed incentive pay for a model.
///
/// The result is derived wRVU compensation minus base pay; a negative
/// value means production did not cover the base salary. Callers decide
/// whether to clamp at zero.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::incentive_pay;
/// use comp_engine::models::ConversionFactorModel;
/// use rust_decimal::Decimal;
///
/// let model = ConversionFactorModel::Single { cf: Decimal::from(55) };
/// let incentive = incentive_pay(
///     Decimal::from(6000),
///     &model,
///     Decimal::from(300000),
///     Decimal::ONE,
///     None,
/// )
/// .unwrap();
/// assert_eq!(incentive, Decimal::from(30000));
/// ```
pub fn incentive_pay(
    wrvus: Decimal,
    model: &ConversionFactorModel,
    base_pay: Decimal,
    fte: Decimal,
    benchmarks: Option<&MarketBenchmarks>,
) -> EngineResult<Decimal> {
    let compensation = derived_compensation(wrvus, model, base_pay, fte, benchmarks)?;
    Ok(compensation - base_pay)
}

/// Partitions wRVUs across cumulative bands and pays each band at its rate.
///
/// Bands are consumed in index order against a running lower boundary;
/// the final band (or any band without a threshold) is unbounded. With a
/// percentage basis, thresholds are read as percentages of total wRVUs.
fn tiered_compensation(wrvus: Decimal, basis: TierBasis, tiers: &[CompTier]) -> Decimal {
    let mut compensation = Decimal::ZERO;
    let mut band_start = Decimal::ZERO;

    for tier in tiers {
        let band_end = tier.threshold.map(|threshold| match basis {
            TierBasis::Threshold => threshold,
            TierBasis::Percentage => threshold / ONE_HUNDRED * wrvus,
        });

        match band_end {
            Some(end) => {
                let allocation = (wrvus.min(end) - band_start).max(Decimal::ZERO);
                compensation += allocation * tier.cf;
                band_start = band_start.max(end);
            }
            None => {
                let allocation = (wrvus - band_start).max(Decimal::ZERO);
                compensation += allocation * tier.cf;
                break;
            }
        }
    }

    compensation
}

/// Selects the single rate whose percentile range contains the provider's
/// FTE-normalized productivity percentile, applied to the full wRVU count.
fn percentile_tiered_compensation(
    wrvus: Decimal,
    fte: Decimal,
    tiers: &[PercentileTier],
    benchmarks: &MarketBenchmarks,
) -> Decimal {
    let Some(selected) = select_percentile_tier(wrvus, fte, tiers, benchmarks) else {
        return Decimal::ZERO;
    };
    wrvus * selected.cf
}

fn select_percentile_tier<'a>(
    wrvus: Decimal,
    fte: Decimal,
    tiers: &'a [PercentileTier],
    benchmarks: &MarketBenchmarks,
) -> Option<&'a PercentileTier> {
    let normalized = if fte > Decimal::ZERO {
        wrvus / fte
    } else {
        Decimal::ZERO
    };
    let percentile = percentile_of(normalized, &benchmarks.wrvu_curve());

    for tier in tiers {
        match tier.percentile_threshold {
            Some(threshold) if percentile < threshold => return Some(tier),
            Some(_) => continue,
            None => return Some(tier),
        }
    }

    // Percentile beyond every bounded tier: the last tier absorbs it.
    tiers.last()
}

/// Solves the flat rate that lands modeled TCC on the target market
/// percentile, falling back to a flat `base_cf` plan when the target
/// cannot be resolved from the available TCC points.
fn budget_neutral_compensation(
    wrvus: Decimal,
    fte: Decimal,
    base_pay: Decimal,
    target_tcc_percentile: Decimal,
    base_cf: Option<Decimal>,
    benchmarks: &MarketBenchmarks,
) -> Decimal {
    match value_at_percentile(target_tcc_percentile, &benchmarks.tcc_curve()) {
        Some(target_tcc) => {
            let target_total = target_tcc * fte;
            let required_incentive = target_total - base_pay;
            let cf = if wrvus > Decimal::ZERO {
                ((required_incentive + base_pay) / wrvus).max(Decimal::ZERO)
            } else {
                Decimal::ZERO
            };
            wrvus * cf
        }
        None => wrvus * base_cf.unwrap_or(DEFAULT_FALLBACK_CF),
    }
}

/// Scales the base rate by a quality score.
///
/// Scores above 1 are read as a 0-100 scale; the resulting factor is
/// clamped to `[0, 1]`, so quality can reduce but never exceed the base
/// rate.
fn quality_weighted_cf(base_cf: Decimal, quality_score: Decimal) -> Decimal {
    let normalized = if quality_score > Decimal::ONE {
        quality_score / ONE_HUNDRED
    } else {
        quality_score
    };
    base_cf * normalized.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Selects the flat rate of the FTE band containing the given FTE.
///
/// Band ranges are `[fte_min, fte_max)`; the final band's upper boundary
/// is inclusive. When no band matches, the last tier applies.
fn fte_adjusted_cf(fte: Decimal, tiers: &[FteTier]) -> Decimal {
    let Some(last) = tiers.last() else {
        return Decimal::ZERO;
    };

    for (index, tier) in tiers.iter().enumerate() {
        let is_last = index == tiers.len() - 1;
        let within_upper = match tier.fte_max {
            Some(max) if is_last => fte <= max,
            Some(max) => fte < max,
            None => true,
        };
        if fte >= tier.fte_min && within_upper {
            return tier.cf;
        }
    }

    last.cf
}
