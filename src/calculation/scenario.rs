//! Compensation scenario orchestration.
//!
//! Runs the full modeling pipeline for one provider scenario: conversion
//! factor evaluation, FTE-normalized market percentiles, alignment and FMV
//! classification, and data-quality warnings where documented numeric
//! fallbacks were applied.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ConversionFactorModel, MarketBenchmarks, PercentileCurve, ScenarioResult, ScenarioWarning,
};

use super::alignment::classify;
use super::conversion_factor::derived_compensation;
use super::percentile::{percentile_estimate, percentile_of};

/// Runs a compensation scenario.
///
/// Derived wRVU compensation is computed from the model; the signed
/// incentive is that compensation minus base pay, and modeled TCC is base
/// pay plus the incentive (callers clamp negative incentives if their plan
/// floors at base). Percentiles are computed on FTE-normalized values; a
/// zero FTE normalizes to zero rather than dividing. The CF percentile is
/// only reported when CF benchmark points exist.
///
/// When a percentile falls back to the neutral default because benchmark
/// data is insufficient, the result carries a low-severity warning rather
/// than failing: messy survey data degrades precision, not availability.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::MissingBenchmarks`] from
/// benchmark-dependent model variants; nothing else errors.
pub fn run_scenario(
    wrvus: Decimal,
    fte: Decimal,
    base_pay: Decimal,
    model: &ConversionFactorModel,
    benchmarks: Option<&MarketBenchmarks>,
) -> EngineResult<ScenarioResult> {
    let compensation = derived_compensation(wrvus, model, base_pay, fte, benchmarks)?;
    let incentive_pay = compensation - base_pay;
    let modeled_tcc = base_pay + incentive_pay;
    let effective_cf = if wrvus > Decimal::ZERO {
        compensation / wrvus
    } else {
        Decimal::ZERO
    };

    let normalized_wrvus = normalize(wrvus, fte);
    let normalized_tcc = normalize(modeled_tcc, fte);

    let wrvu_curve = curve_of(benchmarks, MarketBenchmarks::wrvu_curve);
    let tcc_curve = curve_of(benchmarks, MarketBenchmarks::tcc_curve);
    let cf_curve = curve_of(benchmarks, MarketBenchmarks::cf_curve);

    let mut warnings = Vec::new();

    let wrvu_estimate = percentile_estimate(normalized_wrvus, &wrvu_curve);
    if wrvu_estimate.low_confidence {
        warnings.push(low_confidence_warning("wRVU", "LOW_CONFIDENCE_WRVU_PERCENTILE"));
    }

    let tcc_estimate = percentile_estimate(normalized_tcc, &tcc_curve);
    if tcc_estimate.low_confidence {
        warnings.push(low_confidence_warning("TCC", "LOW_CONFIDENCE_TCC_PERCENTILE"));
    }

    let cf_percentile = if cf_curve.is_empty() {
        None
    } else {
        Some(percentile_of(effective_cf, &cf_curve))
    };

    let alignment = classify(wrvu_estimate.percentile, tcc_estimate.percentile);

    Ok(ScenarioResult {
        scenario_id: Uuid::new_v4(),
        timestamp: chrono::Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        wrvu_percentile: wrvu_estimate.percentile,
        tcc_percentile: tcc_estimate.percentile,
        cf_percentile,
        effective_cf,
        incentive_pay,
        modeled_tcc,
        alignment_status: alignment.status,
        fmv_risk: alignment.fmv_risk,
        warnings,
    })
}

fn normalize(value: Decimal, fte: Decimal) -> Decimal {
    if fte > Decimal::ZERO {
        value / fte
    } else {
        Decimal::ZERO
    }
}

fn curve_of(
    benchmarks: Option<&MarketBenchmarks>,
    select: fn(&MarketBenchmarks) -> PercentileCurve,
) -> PercentileCurve {
    benchmarks.map(select).unwrap_or_default()
}

fn low_confidence_warning(metric: &str, code: &str) -> ScenarioWarning {
    ScenarioWarning {
        code: code.to_string(),
        message: format!(
            "{} benchmarks insufficient; neutral percentile applied",
            metric
        ),
        severity: "low".to_string(),
    }
}
