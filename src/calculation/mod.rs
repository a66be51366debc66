//! Calculation logic for the compensation modeling engine.
//!
//! This module contains all the pure calculation functions: percentile
//! interpolation against sparse survey curves, the six-variant conversion
//! factor engine and its plan summaries, alignment and FMV risk
//! classification, per-tier and aggregate call-pay arithmetic, multi-year
//! budget forecasting, and internal benchmark blending.
//!
//! Everything here is a synchronous, side-effect-free function over
//! immutable inputs; the only ordering requirements are arithmetic (tier
//! partitioning and forecast years accumulate in index order).

mod alignment;
mod call_impact;
mod call_pay;
mod conversion_factor;
mod forecast;
mod internal_benchmarks;
mod model_summary;
mod percentile;
mod scenario;

pub use alignment::{
    ALIGNED_DELTA_TOLERANCE, MILD_DRIFT_DELTA_TOLERANCE, TCC_HIGH_RISK_PERCENTILE,
    TCC_MODERATE_RISK_PERCENTILE, classify,
};
pub use call_impact::impact;
pub use call_pay::{
    HOURS_PER_CALL_SHIFT, annual_calls, call_rate_percentile, effective_rate_per_call,
    effective_rate_per_callback, monthly_tier_pay, tier_annual_pay,
};
pub use conversion_factor::{DEFAULT_FALLBACK_CF, derived_compensation, incentive_pay};
pub use forecast::{budget_variance, forecast};
pub use internal_benchmarks::{
    CF_COLLAR_HIGH, CF_COLLAR_LOW, blend, percentiles_from_records, recommend_cf,
};
pub use model_summary::model_summary;
pub use percentile::{
    NEUTRAL_PERCENTILE, PercentileEstimate, UPPER_TAIL_FACTOR, percentile_estimate, percentile_of,
    value_at_percentile,
};
pub use scenario::run_scenario;
