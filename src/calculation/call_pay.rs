//! Per-tier call pay arithmetic.
//!
//! Converts a call tier's rates and burden into monthly and annual pay per
//! provider, applying trauma uplift and 1-in-N rotation sharing, and derives
//! effective per-call and per-callback rates for benchmarking.

use rust_decimal::Decimal;

use crate::models::{CallBurden, CallPayContext, CallTier, PaymentMethod, PercentileCurve};

use super::percentile::percentile_of;

/// Hours in one call shift, used by the hourly payment method.
pub const HOURS_PER_CALL_SHIFT: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes a tier's modeled pay per provider per month.
///
/// Disabled tiers pay nothing. The burden-driven methods price weekday,
/// weekend, and holiday coverage separately; stipend and retainer methods
/// read their flat amount from the weekday rate field; the per-unit
/// methods price expected cases (falling back to callbacks) across all
/// call days at the weekday rate. Trauma uplift applies multiplicatively
/// on top.
pub fn monthly_tier_pay(tier: &CallTier) -> Decimal {
    if !tier.enabled {
        return Decimal::ZERO;
    }

    let rates = &tier.rates;
    let burden = &tier.burden;

    let base = match tier.payment_method {
        PaymentMethod::AnnualStipend => rates.weekday / MONTHS_PER_YEAR,
        PaymentMethod::DailyShiftRate => shift_month_pay(tier, Decimal::ONE),
        PaymentMethod::HourlyRate => shift_month_pay(tier, HOURS_PER_CALL_SHIFT),
        PaymentMethod::MonthlyRetainer => rates.weekday,
        PaymentMethod::PerProcedure | PaymentMethod::PerWrvu => {
            let units_per_call = burden
                .avg_cases_per_24h
                .unwrap_or(burden.avg_callbacks_per_24h);
            let calls_per_month =
                burden.weekday_calls_per_month + burden.weekend_calls_per_month;
            units_per_call * calls_per_month * rates.weekday
        }
    };

    match rates.trauma_uplift_percent {
        Some(uplift) => base * (Decimal::ONE + uplift / ONE_HUNDRED),
        None => base,
    }
}

fn shift_month_pay(tier: &CallTier, hours_multiplier: Decimal) -> Decimal {
    let rates = &tier.rates;
    let burden = &tier.burden;
    let month = burden.weekday_calls_per_month * rates.weekday
        + burden.weekend_calls_per_month * rates.weekend
        + burden.holidays_per_year / MONTHS_PER_YEAR * rates.holiday;
    month * hours_multiplier
}

/// Computes a tier's annual pay per provider under rotation sharing.
///
/// With a 1-in-N rotation each provider covers 1/N of the calls and earns
/// 1/N of the tier's annual pay. A non-positive rotation ratio yields 0.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::tier_annual_pay;
/// use comp_engine::models::{
///     CallBurden, CallPayContext, CallRates, CallTier, CoverageType, PaymentMethod,
/// };
/// use rust_decimal::Decimal;
///
/// let tier = CallTier {
///     coverage_type: CoverageType::EmergencyDepartment,
///     payment_method: PaymentMethod::MonthlyRetainer,
///     rates: CallRates {
///         weekday: Decimal::from(4000),
///         weekend: Decimal::ZERO,
///         holiday: Decimal::ZERO,
///         trauma_uplift_percent: None,
///     },
///     burden: CallBurden {
///         weekday_calls_per_month: Decimal::from(10),
///         weekend_calls_per_month: Decimal::from(2),
///         holidays_per_year: Decimal::ZERO,
///         avg_callbacks_per_24h: Decimal::ONE,
///         avg_cases_per_24h: None,
///     },
///     enabled: true,
/// };
/// let context = CallPayContext {
///     providers_on_call: 6,
///     rotation_ratio: Decimal::from(4),
///     model_year: 2026,
/// };
///
/// // $4,000/month x 12, shared 1-in-4.
/// assert_eq!(tier_annual_pay(&tier, &context), Decimal::from(12000));
/// ```
pub fn tier_annual_pay(tier: &CallTier, context: &CallPayContext) -> Decimal {
    if context.rotation_ratio <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    monthly_tier_pay(tier) * MONTHS_PER_YEAR / context.rotation_ratio
}

/// Total call days per year implied by a burden.
pub fn annual_calls(burden: &CallBurden) -> Decimal {
    (burden.weekday_calls_per_month + burden.weekend_calls_per_month) * MONTHS_PER_YEAR
        + burden.holidays_per_year
}

/// The tier's annual pay divided across its call days.
///
/// Returns 0 when the tier takes no calls.
pub fn effective_rate_per_call(tier: &CallTier) -> Decimal {
    let calls = annual_calls(&tier.burden);
    if calls <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    monthly_tier_pay(tier) * MONTHS_PER_YEAR / calls
}

/// The tier's annual pay divided across its expected callbacks.
///
/// Returns 0 when no callbacks are expected.
pub fn effective_rate_per_callback(tier: &CallTier) -> Decimal {
    let callbacks = annual_calls(&tier.burden) * tier.burden.avg_callbacks_per_24h;
    if callbacks <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    monthly_tier_pay(tier) * MONTHS_PER_YEAR / callbacks
}

/// Benchmarks a call rate against a survey rate curve.
///
/// A thin wrapper over percentile interpolation so callers can position an
/// effective daily rate against market call-pay data.
pub fn call_rate_percentile(rate: Decimal, curve: &PercentileCurve) -> Decimal {
    percentile_of(rate, curve)
}
