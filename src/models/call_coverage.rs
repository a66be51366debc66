//! Call coverage models.
//!
//! This module defines the call tier record (rates, burden, payment method)
//! and the coverage context used for per-provider and group call-pay math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of coverage a call tier compensates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    /// Emergency department unassigned call.
    EmergencyDepartment,
    /// Trauma-designated coverage.
    Trauma,
    /// Surgical backup coverage.
    SurgicalBackup,
    /// Inpatient consultative coverage.
    InpatientConsult,
    /// Telehealth / remote coverage.
    Telehealth,
}

/// How a call tier is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// A flat rate per 24-hour call day or shift.
    DailyShiftRate,
    /// An hourly rate over 24-hour shifts.
    HourlyRate,
    /// A fixed annual stipend.
    AnnualStipend,
    /// A flat monthly retainer.
    MonthlyRetainer,
    /// A rate per procedure performed while on call.
    PerProcedure,
    /// A rate per wRVU generated while on call.
    PerWrvu,
}

/// The dollar rates of a call tier.
///
/// The interpretation of `weekday`/`weekend`/`holiday` depends on the
/// payment method: a daily rate, an hourly rate, an annual stipend
/// (weekday field), a monthly retainer (weekday field), or a per-unit rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRates {
    /// Weekday rate, or the flat amount for stipend/retainer methods.
    pub weekday: Decimal,
    /// Weekend rate.
    pub weekend: Decimal,
    /// Holiday rate.
    pub holiday: Decimal,
    /// Percentage premium applied for trauma-designated coverage.
    #[serde(default)]
    pub trauma_uplift_percent: Option<Decimal>,
}

/// The expected call burden of a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallBurden {
    /// Weekday call days per month.
    pub weekday_calls_per_month: Decimal,
    /// Weekend call days per month.
    pub weekend_calls_per_month: Decimal,
    /// Holiday call days per year.
    pub holidays_per_year: Decimal,
    /// Average callbacks per 24-hour call period.
    pub avg_callbacks_per_24h: Decimal,
    /// Average procedures/cases per 24-hour call period, if tracked.
    #[serde(default)]
    pub avg_cases_per_24h: Option<Decimal>,
}

/// One call coverage tier of a compensation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTier {
    /// What this tier covers.
    pub coverage_type: CoverageType,
    /// How this tier is paid.
    pub payment_method: PaymentMethod,
    /// The tier's dollar rates.
    pub rates: CallRates,
    /// The tier's expected burden.
    pub burden: CallBurden,
    /// Whether the tier participates in pay and budget calculations.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Group context for call-pay calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPayContext {
    /// Number of providers sharing the call panel.
    pub providers_on_call: u32,
    /// 1-in-N rotation sharing: each provider covers 1/N of the calls.
    pub rotation_ratio: Decimal,
    /// The plan year being modeled.
    pub model_year: i32,
}
