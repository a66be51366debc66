//! Multi-year call-pay budget forecasting.
//!
//! Projects a base-year call-pay impact forward under compounding rate and
//! head-count growth assumptions. Years are processed in increasing offset
//! order: each step consumes the running cumulative multipliers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    BudgetVariance, CallPayContext, CallPayImpact, ForecastAssumptions, MultiYearForecast,
    YearForecast,
};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Projects a call-pay budget over the requested horizon.
///
/// For each year offset `1..=years`, the cumulative rate multiplier
/// compounds by the rate increase, head count grows from the base panel by
/// the compounded growth factor (rounded to whole providers), and the
/// adjusted budget is the grown average pay times the rounded head count.
/// Total projected spend is the base budget plus every projected year.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::forecast;
/// use comp_engine::models::{CallPayContext, CallPayImpact, ForecastAssumptions};
/// use rust_decimal::Decimal;
///
/// let context = CallPayContext {
///     providers_on_call: 10,
///     rotation_ratio: Decimal::from(4),
///     model_year: 2026,
/// };
/// let impact = CallPayImpact {
///     tier_impacts: vec![],
///     total_annual_budget: Decimal::from(1000000),
///     average_annual_per_provider: Decimal::from(100000),
///     call_pay_per_1_fte: Decimal::from(400000),
///     percent_of_tcc: None,
/// };
/// let assumptions = ForecastAssumptions {
///     rate_increase_percent: Decimal::new(25, 1),
///     provider_growth_percent: Decimal::from(5),
///     years: 3,
/// };
///
/// let projection = forecast(&context, &impact, &assumptions);
/// assert_eq!(projection.forecasts.len(), 3);
/// assert_eq!(projection.forecasts[2].providers, 12);
/// ```
pub fn forecast(
    context: &CallPayContext,
    impact: &CallPayImpact,
    assumptions: &ForecastAssumptions,
) -> MultiYearForecast {
    let base_providers = Decimal::from(context.providers_on_call);
    let base_average_pay = impact.average_annual_per_provider;
    let rate_factor = Decimal::ONE + assumptions.rate_increase_percent / ONE_HUNDRED;
    let growth_factor = Decimal::ONE + assumptions.provider_growth_percent / ONE_HUNDRED;

    let mut cumulative_rate = Decimal::ONE;
    let mut cumulative_growth = Decimal::ONE;
    let mut forecasts = Vec::with_capacity(assumptions.years as usize);
    let mut total_projected_spend = impact.total_annual_budget;

    for offset in 1..=assumptions.years {
        cumulative_rate *= rate_factor;
        cumulative_growth *= growth_factor;

        let providers_exact = (base_providers * cumulative_growth)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let providers = providers_exact.to_u32().unwrap_or(0);
        let avg_pay_per_provider = base_average_pay * cumulative_rate;
        let adjusted_budget = avg_pay_per_provider * providers_exact;

        total_projected_spend += adjusted_budget;
        forecasts.push(YearForecast {
            year: context.model_year + offset as i32,
            providers,
            avg_pay_per_provider,
            adjusted_budget,
            cumulative_rate_multiplier: cumulative_rate,
        });
    }

    MultiYearForecast {
        base_year: context.model_year,
        base_budget: impact.total_annual_budget,
        forecasts,
        total_projected_spend,
    }
}

/// Compares actual spend against a budgeted amount.
///
/// The variance percentage guards a non-positive budget by reporting 0.
pub fn budget_variance(actual: Decimal, budgeted: Decimal) -> BudgetVariance {
    let variance = actual - budgeted;
    let variance_percent = if budgeted > Decimal::ZERO {
        variance / budgeted * ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    BudgetVariance {
        variance,
        variance_percent,
        is_over_budget: variance > Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_impact() -> CallPayImpact {
        CallPayImpact {
            tier_impacts: vec![],
            total_annual_budget: dec("1000000"),
            average_annual_per_provider: dec("100000"),
            call_pay_per_1_fte: dec("400000"),
            percent_of_tcc: None,
        }
    }

    fn base_context() -> CallPayContext {
        CallPayContext {
            providers_on_call: 10,
            rotation_ratio: dec("4"),
            model_year: 2026,
        }
    }

    fn assumptions(rate: &str, growth: &str, years: u32) -> ForecastAssumptions {
        ForecastAssumptions {
            rate_increase_percent: dec(rate),
            provider_growth_percent: dec(growth),
            years,
        }
    }

    #[test]
    fn test_three_year_projection_fixture() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("2.5", "5", 3));

        assert_eq!(projection.base_year, 2026);
        assert_eq!(projection.base_budget, dec("1000000"));
        assert_eq!(projection.forecasts.len(), 3);

        // Head count: round(10 x 1.05^n) = 11, 11, 12.
        assert_eq!(projection.forecasts[0].providers, 11);
        assert_eq!(projection.forecasts[1].providers, 11);
        assert_eq!(projection.forecasts[2].providers, 12);

        // Year 3 multiplier: 1.025^3.
        assert_eq!(
            projection.forecasts[2].cumulative_rate_multiplier,
            dec("1.076890625")
        );
        assert_eq!(projection.forecasts[2].year, 2029);
    }

    #[test]
    fn test_projected_pay_compounds() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("2.5", "5", 2));

        assert_eq!(projection.forecasts[0].avg_pay_per_provider, dec("102500"));
        assert_eq!(
            projection.forecasts[1].avg_pay_per_provider,
            dec("105062.50000")
        );
    }

    #[test]
    fn test_total_includes_base_budget() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("0", "0", 2));

        // Flat assumptions: every year repeats the base figures.
        assert_eq!(projection.forecasts[0].adjusted_budget, dec("1000000"));
        assert_eq!(projection.total_projected_spend, dec("3000000"));
    }

    #[test]
    fn test_zero_years_projects_nothing() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("2.5", "5", 0));

        assert!(projection.forecasts.is_empty());
        assert_eq!(projection.total_projected_spend, dec("1000000"));
    }

    #[test]
    fn test_adjusted_budget_uses_rounded_head_count() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("0", "5", 1));

        // 10 x 1.05 = 10.5 rounds away from zero to 11.
        assert_eq!(projection.forecasts[0].providers, 11);
        assert_eq!(projection.forecasts[0].adjusted_budget, dec("1100000"));
    }

    #[test]
    fn test_negative_growth_shrinks_panel() {
        let projection = forecast(&base_context(), &base_impact(), &assumptions("0", "-10", 2));

        assert_eq!(projection.forecasts[0].providers, 9);
        assert_eq!(projection.forecasts[1].providers, 8);
    }

    #[test]
    fn test_variance_over_budget() {
        let variance = budget_variance(dec("110000"), dec("100000"));
        assert_eq!(variance.variance, dec("10000"));
        assert_eq!(variance.variance_percent, dec("10"));
        assert!(variance.is_over_budget);
    }

    #[test]
    fn test_variance_under_budget() {
        let variance = budget_variance(dec("90000"), dec("100000"));
        assert_eq!(variance.variance, dec("-10000"));
        assert_eq!(variance.variance_percent, dec("-10"));
        assert!(!variance.is_over_budget);
    }

    #[test]
    fn test_variance_zero_budget_guarded() {
        let variance = budget_variance(dec("50000"), Decimal::ZERO);
        assert_eq!(variance.variance, dec("50000"));
        assert_eq!(variance.variance_percent, Decimal::ZERO);
        assert!(variance.is_over_budget);
    }
}
