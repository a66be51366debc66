//! Alignment and FMV risk classification.
//!
//! Classifies the relationship between a provider's productivity percentile
//! and compensation percentile. Rule order matters: absolute compensation
//! level dominates relative alignment once above threshold, so being
//! "aligned" does not excuse high absolute pay.

use rust_decimal::Decimal;

use crate::models::{Alignment, AlignmentStatus, FmvRisk};

/// TCC percentile above which a scenario is always RiskZone/High.
pub const TCC_HIGH_RISK_PERCENTILE: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// TCC percentile at or above which a scenario is at least
/// RiskZone/Moderate.
pub const TCC_MODERATE_RISK_PERCENTILE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Maximum |TCC% - wRVU%| delta still considered aligned.
pub const ALIGNED_DELTA_TOLERANCE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Maximum |TCC% - wRVU%| delta still considered mild drift.
pub const MILD_DRIFT_DELTA_TOLERANCE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Classifies a (wRVU percentile, TCC percentile) pair.
///
/// Rules, in order:
/// 1. TCC above the 90th percentile: RiskZone/High regardless of delta.
/// 2. TCC in the 75th-90th band (inclusive of 75): RiskZone/Moderate
///    regardless of delta.
/// 3. Otherwise the absolute delta decides: within 10 points Aligned/Low,
///    within 15 MildDrift/Low, beyond that RiskZone/Low.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::classify;
/// use comp_engine::models::{AlignmentStatus, FmvRisk};
/// use rust_decimal::Decimal;
///
/// let alignment = classify(Decimal::from(95), Decimal::from(95));
/// assert_eq!(alignment.status, AlignmentStatus::RiskZone);
/// assert_eq!(alignment.fmv_risk, FmvRisk::High);
/// ```
pub fn classify(wrvu_percentile: Decimal, tcc_percentile: Decimal) -> Alignment {
    if tcc_percentile > TCC_HIGH_RISK_PERCENTILE {
        return Alignment {
            status: AlignmentStatus::RiskZone,
            fmv_risk: FmvRisk::High,
        };
    }

    if tcc_percentile >= TCC_MODERATE_RISK_PERCENTILE {
        return Alignment {
            status: AlignmentStatus::RiskZone,
            fmv_risk: FmvRisk::Moderate,
        };
    }

    let delta = (tcc_percentile - wrvu_percentile).abs();
    let status = if delta <= ALIGNED_DELTA_TOLERANCE {
        AlignmentStatus::Aligned
    } else if delta <= MILD_DRIFT_DELTA_TOLERANCE {
        AlignmentStatus::MildDrift
    } else {
        AlignmentStatus::RiskZone
    };

    Alignment {
        status,
        fmv_risk: FmvRisk::Low,
    }
}
