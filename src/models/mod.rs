//! Core data models for the compensation modeling engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Every entity is an immutable value record built by the calling layer;
//! the core never owns persisted state, identity, or timestamps.

mod benchmarks;
mod call_coverage;
mod cf_model;
mod forecast;
mod provider;
mod scenario;

pub use benchmarks::{
    BENCHMARK_RANKS, BlendMode, BlendWeights, CfRecommendation, InternalPercentiles,
    MarketBenchmarks, PercentileCurve,
};
pub use call_coverage::{
    CallBurden, CallPayContext, CallRates, CallTier, CoverageType, PaymentMethod,
};
pub use cf_model::{CompTier, ConversionFactorModel, FteTier, PercentileTier, TierBasis};
pub use forecast::{
    BudgetVariance, CallPayImpact, ForecastAssumptions, MultiYearForecast, TierImpact,
    YearForecast,
};
pub use provider::ProviderRecord;
pub use scenario::{Alignment, AlignmentStatus, FmvRisk, ScenarioResult, ScenarioWarning};
