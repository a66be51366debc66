//! Internal benchmarking: empirical percentiles, survey blending, and CF
//! recommendations.
//!
//! Empirical percentiles use the order-statistic method over a sorted,
//! FTE-normalized sample (`index = p/100 x (n-1)`, linear between ranks).
//! This is deliberately distinct from the sparse-point interpolation used
//! for survey curves: one ranks a sample, the other reads a curve.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{
    BlendMode, BlendWeights, CfRecommendation, InternalPercentiles, MarketBenchmarks,
    ProviderRecord,
};

/// Lower collar factor on the median CF in a recommendation.
pub const CF_COLLAR_LOW: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Upper collar factor on the median CF in a recommendation.
pub const CF_COLLAR_HIGH: Decimal = Decimal::from_parts(11, 0, 0, false, 1);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes empirical percentiles from raw provider records.
///
/// Each record is normalized by its FTE before ranking; records with a
/// non-positive FTE cannot be normalized and are skipped. Returns `None`
/// when no usable records remain.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::percentiles_from_records;
/// use comp_engine::models::ProviderRecord;
/// use rust_decimal::Decimal;
///
/// let records: Vec<ProviderRecord> = (1..=5)
///     .map(|i| {
///         ProviderRecord::new(
///             Decimal::from(i * 1000),
///             Decimal::from(i * 100000),
///             Decimal::ONE,
///         )
///     })
///     .collect();
///
/// let percentiles = percentiles_from_records(&records).unwrap();
/// assert_eq!(percentiles.wrvu_50, Decimal::from(3000));
/// assert_eq!(percentiles.sample_size, 5);
/// ```
pub fn percentiles_from_records(records: &[ProviderRecord]) -> Option<InternalPercentiles> {
    let mut wrvus = Vec::with_capacity(records.len());
    let mut tccs = Vec::with_capacity(records.len());

    for record in records {
        if record.fte > Decimal::ZERO {
            wrvus.push(record.wrvus / record.fte);
            tccs.push(record.tcc / record.fte);
        }
    }

    if wrvus.is_empty() {
        return None;
    }

    wrvus.sort();
    tccs.sort();

    Some(InternalPercentiles {
        wrvu_25: order_statistic(&wrvus, Decimal::from(25)),
        wrvu_50: order_statistic(&wrvus, Decimal::from(50)),
        wrvu_75: order_statistic(&wrvus, Decimal::from(75)),
        wrvu_90: order_statistic(&wrvus, Decimal::from(90)),
        tcc_25: order_statistic(&tccs, Decimal::from(25)),
        tcc_50: order_statistic(&tccs, Decimal::from(50)),
        tcc_75: order_statistic(&tccs, Decimal::from(75)),
        tcc_90: order_statistic(&tccs, Decimal::from(90)),
        sample_size: wrvus.len(),
    })
}

/// The `index = p/100 x (n-1)` order statistic with linear interpolation
/// between the floor and ceiling ranks. The input must be sorted and
/// non-empty.
fn order_statistic(sorted: &[Decimal], percentile: Decimal) -> Decimal {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let index = percentile / ONE_HUNDRED * Decimal::from(n - 1);
    let lower = index.floor();
    let fraction = index - lower;
    let lower_index = lower.to_usize().unwrap_or(0).min(n - 1);
    let upper_index = (lower_index + 1).min(n - 1);

    sorted[lower_index] + (sorted[upper_index] - sorted[lower_index]) * fraction
}

/// Blends internal percentiles with survey benchmarks.
///
/// `SurveyOnly` and `InternalOnly` pass their side through unchanged
/// (`InternalOnly` degrades to the survey when no internal data exists).
/// `Blended` computes a weighted mean per percentile point independently
/// for wRVUs and TCC, using the survey value alone where internal data
/// cannot contribute and vice versa. Survey CF points are carried through
/// untouched: internal records carry no CF observations.
pub fn blend(
    internal: Option<&InternalPercentiles>,
    survey: &MarketBenchmarks,
    mode: BlendMode,
    weights: Option<BlendWeights>,
) -> MarketBenchmarks {
    match mode {
        BlendMode::SurveyOnly => survey.clone(),
        BlendMode::InternalOnly => match internal {
            Some(internal) => benchmarks_from_internal(internal, survey),
            None => survey.clone(),
        },
        BlendMode::Blended => {
            let Some(internal) = internal else {
                return survey.clone();
            };
            let weights = normalized_weights(weights.unwrap_or_default());

            MarketBenchmarks {
                wrvu_25: blend_point(survey.wrvu_25, internal.wrvu_25, weights),
                wrvu_50: blend_point(survey.wrvu_50, internal.wrvu_50, weights),
                wrvu_75: blend_point(survey.wrvu_75, internal.wrvu_75, weights),
                wrvu_90: blend_point(survey.wrvu_90, internal.wrvu_90, weights),
                tcc_25: blend_point(survey.tcc_25, internal.tcc_25, weights),
                tcc_50: blend_point(survey.tcc_50, internal.tcc_50, weights),
                tcc_75: blend_point(survey.tcc_75, internal.tcc_75, weights),
                tcc_90: blend_point(survey.tcc_90, internal.tcc_90, weights),
                cf_25: survey.cf_25,
                cf_50: survey.cf_50,
                cf_75: survey.cf_75,
                cf_90: survey.cf_90,
            }
        }
    }
}

fn benchmarks_from_internal(
    internal: &InternalPercentiles,
    survey: &MarketBenchmarks,
) -> MarketBenchmarks {
    MarketBenchmarks {
        wrvu_25: Some(internal.wrvu_25),
        wrvu_50: Some(internal.wrvu_50),
        wrvu_75: Some(internal.wrvu_75),
        wrvu_90: Some(internal.wrvu_90),
        tcc_25: Some(internal.tcc_25),
        tcc_50: Some(internal.tcc_50),
        tcc_75: Some(internal.tcc_75),
        tcc_90: Some(internal.tcc_90),
        cf_25: survey.cf_25,
        cf_50: survey.cf_50,
        cf_75: survey.cf_75,
        cf_90: survey.cf_90,
    }
}

fn normalized_weights(weights: BlendWeights) -> BlendWeights {
    let total = weights.survey + weights.internal;
    if total <= Decimal::ZERO {
        return BlendWeights::default();
    }
    BlendWeights {
        survey: weights.survey / total,
        internal: weights.internal / total,
    }
}

fn blend_point(
    survey: Option<Decimal>,
    internal: Decimal,
    weights: BlendWeights,
) -> Option<Decimal> {
    match survey {
        Some(survey_value) => Some(survey_value * weights.survey + internal * weights.internal),
        None => Some(internal),
    }
}

/// Recommends a conversion factor range from blended benchmarks.
///
/// Each implied CF is the TCC point divided by the wRVU point at the same
/// rank. The median anchors the range; the bounds are a +/-10% collar
/// widened by the actual 25th/75th-derived values when those resolve.
/// Returns `None` when the median CF cannot be derived.
pub fn recommend_cf(blended: &MarketBenchmarks, model_year: i32) -> Option<CfRecommendation> {
    let median_cf = implied_cf(blended.tcc_50, blended.wrvu_50)?;
    let cf_25 = implied_cf(blended.tcc_25, blended.wrvu_25);
    let cf_75 = implied_cf(blended.tcc_75, blended.wrvu_75);

    let collar_low = median_cf * CF_COLLAR_LOW;
    let collar_high = median_cf * CF_COLLAR_HIGH;

    Some(CfRecommendation {
        min_cf: cf_25.map_or(collar_low, |cf| cf.min(collar_low)),
        max_cf: cf_75.map_or(collar_high, |cf| cf.max(collar_high)),
        median_cf,
        model_year,
    })
}

fn implied_cf(tcc: Option<Decimal>, wrvu: Option<Decimal>) -> Option<Decimal> {
    match (tcc, wrvu) {
        (Some(tcc), Some(wrvu)) if wrvu > Decimal::ZERO => Some(tcc / wrvu),
        _ => None,
    }
}
