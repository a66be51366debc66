//! Call-pay impact and budget forecast models.
//!
//! This module contains the aggregate records produced by the call-pay
//! impact calculation and the multi-year budget forecaster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CoverageType, PaymentMethod};

/// The per-tier outcome of a call-pay impact calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierImpact {
    /// What the tier covers.
    pub coverage_type: CoverageType,
    /// How the tier is paid.
    pub payment_method: PaymentMethod,
    /// Modeled pay per provider per month, uplift included.
    pub monthly_pay: Decimal,
    /// Modeled pay per provider per year after rotation sharing.
    pub annual_pay_per_provider: Decimal,
    /// Annual budget for the whole panel on this tier.
    pub group_budget: Decimal,
}

/// The aggregate outcome of a call-pay impact calculation across all
/// enabled tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPayImpact {
    /// Per-tier breakdowns, enabled tiers only.
    pub tier_impacts: Vec<TierImpact>,
    /// Sum of the per-tier group budgets.
    pub total_annual_budget: Decimal,
    /// Mean annual pay per provider across the enabled tiers.
    pub average_annual_per_provider: Decimal,
    /// Annual call pay normalized to a full 1.0 FTE of coverage.
    pub call_pay_per_1_fte: Decimal,
    /// Average annual pay as a percentage of a TCC reference, when one
    /// was supplied.
    pub percent_of_tcc: Option<Decimal>,
}

/// Growth assumptions for a multi-year call-pay budget forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastAssumptions {
    /// Annual rate increase, percent.
    pub rate_increase_percent: Decimal,
    /// Annual provider head-count growth, percent.
    pub provider_growth_percent: Decimal,
    /// Number of years to project beyond the base year.
    pub years: u32,
}

/// One projected year of a budget forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearForecast {
    /// The calendar year of this projection.
    pub year: i32,
    /// Projected provider head count, rounded to whole providers.
    pub providers: u32,
    /// Projected average annual pay per provider.
    pub avg_pay_per_provider: Decimal,
    /// Projected budget: average pay times head count.
    pub adjusted_budget: Decimal,
    /// Compounded rate multiplier applied through this year.
    pub cumulative_rate_multiplier: Decimal,
}

/// A multi-year call-pay budget projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiYearForecast {
    /// The base (unprojected) year.
    pub base_year: i32,
    /// The base-year budget.
    pub base_budget: Decimal,
    /// Projections for each year beyond the base year, in order.
    pub forecasts: Vec<YearForecast>,
    /// The base budget plus every projected year's budget.
    pub total_projected_spend: Decimal,
}

/// Actual-versus-budget variance for a single period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVariance {
    /// Actual spend minus budgeted spend.
    pub variance: Decimal,
    /// Variance as a percentage of budget; 0 when the budget was 0.
    pub variance_percent: Decimal,
    /// True when actual spend exceeded budget.
    pub is_over_budget: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_impact_serialization() {
        let impact = CallPayImpact {
            tier_impacts: vec![],
            total_annual_budget: dec("187800"),
            average_annual_per_provider: dec("31300"),
            call_pay_per_1_fte: dec("125200"),
            percent_of_tcc: None,
        };

        let json = serde_json::to_string(&impact).unwrap();
        assert!(json.contains("\"total_annual_budget\":\"187800\""));
        assert!(json.contains("\"percent_of_tcc\":null"));
    }

    #[test]
    fn test_forecast_deserialization() {
        let json = r#"{
            "base_year": 2026,
            "base_budget": "1000000",
            "forecasts": [
                {
                    "year": 2027,
                    "providers": 11,
                    "avg_pay_per_provider": "102500",
                    "adjusted_budget": "1127500",
                    "cumulative_rate_multiplier": "1.025"
                }
            ],
            "total_projected_spend": "2127500"
        }"#;

        let forecast: MultiYearForecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.base_year, 2026);
        assert_eq!(forecast.forecasts.len(), 1);
        assert_eq!(forecast.forecasts[0].providers, 11);
        assert_eq!(forecast.total_projected_spend, dec("2127500"));
    }

    #[test]
    fn test_assumptions_deserialization() {
        let json = r#"{
            "rate_increase_percent": "2.5",
            "provider_growth_percent": "5",
            "years": 3
        }"#;

        let assumptions: ForecastAssumptions = serde_json::from_str(json).unwrap();
        assert_eq!(assumptions.rate_increase_percent, dec("2.5"));
        assert_eq!(assumptions.years, 3);
    }
}
