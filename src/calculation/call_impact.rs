//! Aggregate call-pay impact across a plan's tiers.
//!
//! Rolls the per-tier arithmetic up into panel-level budget figures:
//! group budgets, averages per provider, 1.0-FTE-equivalent pay, and an
//! optional percent-of-TCC reference.

use rust_decimal::Decimal;

use crate::models::{CallPayContext, CallPayImpact, CallTier, TierImpact};

use super::call_pay::{monthly_tier_pay, tier_annual_pay};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Computes the aggregate call-pay impact of the enabled tiers.
///
/// For each enabled tier the group budget is the per-provider annual pay
/// times the panel size; the totals sum those budgets. The average is the
/// mean per-provider annual pay across enabled tiers, and
/// `call_pay_per_1_fte` undoes rotation sharing to express what one full
/// FTE of coverage costs. Percent-of-TCC is only computed when a
/// reference compensation is supplied, and guards a zero reference.
///
/// # Example
///
/// ```no_run
/// use comp_engine::calculation::impact;
/// use comp_engine::models::CallPayContext;
/// use rust_decimal::Decimal;
///
/// # let tiers: Vec<comp_engine::models::CallTier> = vec![];
/// let context = CallPayContext {
///     providers_on_call: 6,
///     rotation_ratio: Decimal::from(4),
///     model_year: 2026,
/// };
/// let result = impact(&tiers, &context, Some(Decimal::from(400000)));
/// assert!(result.percent_of_tcc.is_some());
/// ```
pub fn impact(
    tiers: &[CallTier],
    context: &CallPayContext,
    tcc_reference: Option<Decimal>,
) -> CallPayImpact {
    let providers = Decimal::from(context.providers_on_call);

    let tier_impacts: Vec<TierImpact> = tiers
        .iter()
        .filter(|tier| tier.enabled)
        .map(|tier| {
            let monthly_pay = monthly_tier_pay(tier);
            let annual_pay_per_provider = tier_annual_pay(tier, context);
            TierImpact {
                coverage_type: tier.coverage_type,
                payment_method: tier.payment_method,
                monthly_pay,
                annual_pay_per_provider,
                group_budget: annual_pay_per_provider * providers,
            }
        })
        .collect();

    let total_annual_budget: Decimal = tier_impacts.iter().map(|t| t.group_budget).sum();

    let average_annual_per_provider = if tier_impacts.is_empty() {
        Decimal::ZERO
    } else {
        let summed: Decimal = tier_impacts
            .iter()
            .map(|t| t.annual_pay_per_provider)
            .sum();
        summed / Decimal::from(tier_impacts.len())
    };

    let call_pay_per_1_fte = average_annual_per_provider * context.rotation_ratio;

    let percent_of_tcc = tcc_reference.map(|reference| {
        if reference > Decimal::ZERO {
            average_annual_per_provider / reference * ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    });

    CallPayImpact {
        tier_impacts,
        total_annual_budget,
        average_annual_per_provider,
        call_pay_per_1_fte,
        percent_of_tcc,
    }
}
