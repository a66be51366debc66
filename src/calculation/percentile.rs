//! Percentile interpolation against sparse survey benchmark curves.
//!
//! Survey data arrives as up to four points per metric (25th/50th/75th/90th
//! percentile). This module treats the available points as a piecewise-linear
//! monotone curve and converts between values and percentiles in both
//! directions, degrading to documented defaults when points are missing.

use rust_decimal::Decimal;

use crate::models::PercentileCurve;

/// Percentile returned when benchmark data cannot support an estimate.
pub const NEUTRAL_PERCENTILE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Factor applied to the highest known point to synthesize a 100th
/// percentile for upper-tail extrapolation.
pub const UPPER_TAIL_FACTOR: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A percentile estimate together with a data-sufficiency flag.
///
/// The numeric value is identical to [`percentile_of`]; `low_confidence`
/// marks that the neutral default was applied because the curve had no
/// usable points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentileEstimate {
    /// The estimated percentile in `[0, 100]`.
    pub percentile: Decimal,
    /// True when the estimate fell back to [`NEUTRAL_PERCENTILE`].
    pub low_confidence: bool,
}

/// Converts a value to its market percentile against a sparse curve.
///
/// Within the known range, the bracketing pair of *available* adjacent
/// points is located and interpolated linearly. Below the lowest known
/// point the curve is extrapolated through the origin; above the highest
/// known point a synthetic 100th percentile at [`UPPER_TAIL_FACTOR`] times
/// that point is used, and the result is clamped to 100. Non-positive
/// values map to percentile 0. A curve with no usable points yields
/// [`NEUTRAL_PERCENTILE`].
///
/// # Example
///
/// ```
/// use comp_engine::calculation::percentile_of;
/// use comp_engine::models::PercentileCurve;
/// use rust_decimal::Decimal;
///
/// let curve = PercentileCurve::new(
///     Decimal::from(4000),
///     Decimal::from(5000),
///     Decimal::from(6000),
///     Decimal::from(8000),
/// );
///
/// // Halfway between the 50th and 75th percentile points.
/// assert_eq!(
///     percentile_of(Decimal::from(5500), &curve),
///     Decimal::new(625, 1),
/// );
/// ```
pub fn percentile_of(value: Decimal, curve: &PercentileCurve) -> Decimal {
    percentile_estimate(value, curve).percentile
}

/// Converts a value to its market percentile, reporting whether the
/// neutral fallback was applied.
///
/// See [`percentile_of`] for the interpolation rules.
pub fn percentile_estimate(value: Decimal, curve: &PercentileCurve) -> PercentileEstimate {
    if value <= Decimal::ZERO {
        return PercentileEstimate {
            percentile: Decimal::ZERO,
            low_confidence: false,
        };
    }

    let points = curve.available();
    if points.is_empty() {
        return PercentileEstimate {
            percentile: NEUTRAL_PERCENTILE,
            low_confidence: true,
        };
    }

    let (first_rank, first_value) = points[0];
    if value < first_value {
        // Below the lowest known point: extrapolate through the origin.
        let percentile = (first_rank * value / first_value).clamp(Decimal::ZERO, first_rank);
        return PercentileEstimate {
            percentile,
            low_confidence: false,
        };
    }

    let (last_rank, last_value) = points[points.len() - 1];
    if value >= last_value {
        // Above the highest known point: interpolate toward a synthetic
        // 100th percentile.
        let synthetic = last_value * UPPER_TAIL_FACTOR;
        let span = synthetic - last_value;
        let percentile = if span <= Decimal::ZERO {
            ONE_HUNDRED
        } else {
            let raw = last_rank + (ONE_HUNDRED - last_rank) * (value - last_value) / span;
            raw.clamp(last_rank, ONE_HUNDRED)
        };
        return PercentileEstimate {
            percentile,
            low_confidence: false,
        };
    }

    for pair in points.windows(2) {
        let (lower_rank, lower_value) = pair[0];
        let (upper_rank, upper_value) = pair[1];
        if value >= lower_value && value <= upper_value {
            let span = upper_value - lower_value;
            let percentile = if span.is_zero() {
                lower_rank
            } else {
                lower_rank + (upper_rank - lower_rank) * (value - lower_value) / span
            };
            return PercentileEstimate {
                percentile,
                low_confidence: false,
            };
        }
    }

    // No usable bracket: out-of-order survey data.
    PercentileEstimate {
        percentile: NEUTRAL_PERCENTILE,
        low_confidence: true,
    }
}

/// Converts a target percentile back to a value against a sparse curve.
///
/// The inverse of [`percentile_of`]: the same piecewise interpolation run
/// in reverse, used to look up "value at target percentile" for
/// budget-neutral CF solving and recommended-CF lookups. Percentiles below
/// the lowest known rank extrapolate through the origin; percentiles above
/// the highest known rank interpolate toward the synthetic 100th point.
/// Returns `None` when the curve has no points.
///
/// # Example
///
/// ```
/// use comp_engine::calculation::value_at_percentile;
/// use comp_engine::models::PercentileCurve;
/// use rust_decimal::Decimal;
///
/// let curve = PercentileCurve::new(
///     Decimal::from(4000),
///     Decimal::from(5000),
///     Decimal::from(6000),
///     Decimal::from(8000),
/// );
///
/// assert_eq!(
///     value_at_percentile(Decimal::new(625, 1), &curve),
///     Some(Decimal::from(5500)),
/// );
/// assert_eq!(value_at_percentile(Decimal::from(50), &PercentileCurve::default()), None);
/// ```
pub fn value_at_percentile(percentile: Decimal, curve: &PercentileCurve) -> Option<Decimal> {
    let points = curve.available();
    if points.is_empty() {
        return None;
    }

    let percentile = percentile.clamp(Decimal::ZERO, ONE_HUNDRED);

    let (first_rank, first_value) = points[0];
    if percentile <= first_rank {
        // Ranks start at 25, so this division is always defined.
        return Some(first_value * percentile / first_rank);
    }

    let (last_rank, last_value) = points[points.len() - 1];
    if percentile >= last_rank {
        let synthetic = last_value * UPPER_TAIL_FACTOR;
        let rank_span = ONE_HUNDRED - last_rank;
        return Some(last_value + (synthetic - last_value) * (percentile - last_rank) / rank_span);
    }

    for pair in points.windows(2) {
        let (lower_rank, lower_value) = pair[0];
        let (upper_rank, upper_value) = pair[1];
        if percentile >= lower_rank && percentile <= upper_rank {
            let value = lower_value
                + (upper_value - lower_value) * (percentile - lower_rank)
                    / (upper_rank - lower_rank);
            return Some(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn full_curve() -> PercentileCurve {
        PercentileCurve::new(dec("4000"), dec("5000"), dec("6500"), dec("8000"))
    }

    #[test]
    fn test_value_at_known_points_returns_their_ranks() {
        let curve = full_curve();
        assert_eq!(percentile_of(dec("4000"), &curve), dec("25"));
        assert_eq!(percentile_of(dec("5000"), &curve), dec("50"));
        assert_eq!(percentile_of(dec("6500"), &curve), dec("75"));
        assert_eq!(percentile_of(dec("8000"), &curve), dec("90"));
    }

    #[test]
    fn test_interpolates_between_adjacent_points() {
        let curve = full_curve();
        // 6000 sits two thirds of the way from 5000 to 6500.
        let pct = percentile_of(dec("6000"), &curve);
        assert!(pct > dec("66.66") && pct < dec("66.67"), "got {}", pct);
    }

    #[test]
    fn test_below_p25_extrapolates_through_origin() {
        let curve = full_curve();
        assert_eq!(percentile_of(dec("2000"), &curve), dec("12.5"));
        assert_eq!(percentile_of(dec("1000"), &curve), dec("6.25"));
    }

    #[test]
    fn test_zero_and_negative_values_are_percentile_zero() {
        let curve = full_curve();
        assert_eq!(percentile_of(Decimal::ZERO, &curve), Decimal::ZERO);
        assert_eq!(percentile_of(dec("-100"), &curve), Decimal::ZERO);
    }

    #[test]
    fn test_above_p90_uses_synthetic_hundredth_point() {
        let curve = full_curve();
        // Synthetic 100th = 1.3 x 8000 = 10400.
        assert_eq!(percentile_of(dec("10400"), &curve), dec("100"));
        // 9200 is halfway from 8000 to 10400.
        assert_eq!(percentile_of(dec("9200"), &curve), dec("95"));
        // Beyond the synthetic point: clamped.
        assert_eq!(percentile_of(dec("50000"), &curve), dec("100"));
    }

    #[test]
    fn test_missing_interior_point_bridges_the_gap() {
        let curve = PercentileCurve {
            p25: Some(dec("4000")),
            p50: None,
            p75: Some(dec("6000")),
            p90: Some(dec("8000")),
        };

        // 5000 is halfway between the 25th and 75th points.
        assert_eq!(percentile_of(dec("5000"), &curve), dec("50"));
    }

    #[test]
    fn test_single_point_curve() {
        let curve = PercentileCurve {
            p50: Some(dec("5000")),
            ..PercentileCurve::default()
        };

        assert_eq!(percentile_of(dec("2500"), &curve), dec("25"));
        assert_eq!(percentile_of(dec("5000"), &curve), dec("50"));
        // Synthetic 100th = 6500; 5750 is halfway from 5000.
        assert_eq!(percentile_of(dec("5750"), &curve), dec("75"));
    }

    #[test]
    fn test_empty_curve_returns_neutral_default() {
        let curve = PercentileCurve::default();
        let estimate = percentile_estimate(dec("5000"), &curve);
        assert_eq!(estimate.percentile, NEUTRAL_PERCENTILE);
        assert!(estimate.low_confidence);
    }

    #[test]
    fn test_usable_estimate_is_not_low_confidence() {
        let estimate = percentile_estimate(dec("5000"), &full_curve());
        assert_eq!(estimate.percentile, dec("50"));
        assert!(!estimate.low_confidence);
    }

    #[test]
    fn test_flat_segment_returns_lower_rank() {
        let curve = PercentileCurve {
            p25: Some(dec("5000")),
            p50: Some(dec("5000")),
            p75: Some(dec("6000")),
            p90: None,
        };

        assert_eq!(percentile_of(dec("5000"), &curve), dec("25"));
    }

    #[test]
    fn test_monotone_in_value() {
        let curve = full_curve();
        let samples = [
            "0", "500", "2000", "4000", "4500", "5000", "6000", "6500", "7999", "8000", "9000",
            "10400", "20000",
        ];

        let mut previous = Decimal::MIN;
        for sample in samples {
            let pct = percentile_of(dec(sample), &curve);
            assert!(pct >= previous, "not monotone at {}", sample);
            previous = pct;
        }
    }

    #[test]
    fn test_value_at_percentile_at_known_ranks() {
        let curve = full_curve();
        assert_eq!(value_at_percentile(dec("25"), &curve), Some(dec("4000")));
        assert_eq!(value_at_percentile(dec("50"), &curve), Some(dec("5000")));
        assert_eq!(value_at_percentile(dec("90"), &curve), Some(dec("8000")));
    }

    #[test]
    fn test_value_at_percentile_interpolates() {
        let curve = full_curve();
        // Halfway between the 25th and 50th ranks.
        assert_eq!(value_at_percentile(dec("37.5"), &curve), Some(dec("4500")));
    }

    #[test]
    fn test_value_at_percentile_below_lowest_rank() {
        let curve = full_curve();
        assert_eq!(value_at_percentile(dec("12.5"), &curve), Some(dec("2000")));
        assert_eq!(value_at_percentile(Decimal::ZERO, &curve), Some(dec("0")));
    }

    #[test]
    fn test_value_at_percentile_upper_tail() {
        let curve = full_curve();
        assert_eq!(value_at_percentile(dec("100"), &curve), Some(dec("10400.0")));
        assert_eq!(value_at_percentile(dec("95"), &curve), Some(dec("9200.0")));
    }

    #[test]
    fn test_value_at_percentile_empty_curve_is_none() {
        assert_eq!(
            value_at_percentile(dec("50"), &PercentileCurve::default()),
            None
        );
    }

    #[test]
    fn test_round_trip_through_both_directions() {
        let curve = full_curve();
        for p in ["5", "25", "37.5", "50", "62.5", "75", "90", "95", "100"] {
            let p = dec(p);
            let value = value_at_percentile(p, &curve).unwrap();
            let back = percentile_of(value, &curve);
            assert_eq!(back, p, "round trip failed at {}", p);
        }
    }
}
