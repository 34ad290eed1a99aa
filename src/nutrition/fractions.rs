//! Fractional quantity entry
//!
//! Whole-plus-fraction entry for volume measurements, as used by the
//! quantity input controls. Decomposition is approximate by design: it
//! snaps to the nearest common cooking fraction for display convenience.

use super::units::{Unit, UnitGroup};

/// A display fraction and its decimal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonFraction {
    pub display: &'static str,
    pub decimal: f64,
}

/// Common cooking fractions
pub const COMMON_FRACTIONS: [CommonFraction; 9] = [
    CommonFraction { display: "1/8", decimal: 0.125 },
    CommonFraction { display: "1/4", decimal: 0.25 },
    CommonFraction { display: "1/3", decimal: 0.333333 },
    CommonFraction { display: "3/8", decimal: 0.375 },
    CommonFraction { display: "1/2", decimal: 0.5 },
    CommonFraction { display: "5/8", decimal: 0.625 },
    CommonFraction { display: "2/3", decimal: 0.666667 },
    CommonFraction { display: "3/4", decimal: 0.75 },
    CommonFraction { display: "7/8", decimal: 0.875 },
];

/// Remainders farther than this from every table entry drop to 0
const SNAP_TOLERANCE: f64 = 0.01;

/// Tolerance for the exact display lookup
const DISPLAY_TOLERANCE: f64 = 1e-4;

/// Whether a unit supports fractional entry (volume measurements only)
pub fn is_fractionable(unit: Unit) -> bool {
    unit.group() == UnitGroup::Volume
}

/// Combine a whole number and a fraction into one decimal quantity
pub fn combine_fraction(whole: u32, fraction: f64) -> f64 {
    f64::from(whole) + fraction
}

/// Split a decimal into a whole part and the nearest common fraction
pub fn split_decimal(decimal: f64) -> (u32, f64) {
    let whole = decimal.floor();
    let remainder = decimal - whole;

    let mut closest = 0.0;
    let mut closest_diff = 1.0;
    for fraction in &COMMON_FRACTIONS {
        let diff = (remainder - fraction.decimal).abs();
        if diff < closest_diff {
            closest_diff = diff;
            closest = fraction.decimal;
        }
    }

    let fraction = if closest_diff < SNAP_TOLERANCE { closest } else { 0.0 };
    (whole as u32, fraction)
}

/// Display label for an exact fraction value
///
/// Returns `None` for decimals not in the table; callers fall back to plain
/// numeric display.
pub fn fraction_display(decimal: f64) -> Option<&'static str> {
    COMMON_FRACTIONS
        .iter()
        .find(|f| (f.decimal - decimal).abs() < DISPLAY_TOLERANCE)
        .map(|f| f.display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fractionable() {
        assert!(is_fractionable(Unit::Cup));
        assert!(is_fractionable(Unit::Milliliter));
        assert!(is_fractionable(Unit::Teaspoon));
        assert!(!is_fractionable(Unit::Gram));
        assert!(!is_fractionable(Unit::Count));
    }

    #[test]
    fn test_combine_fraction() {
        assert_eq!(combine_fraction(2, 0.5), 2.5);
        assert_eq!(combine_fraction(0, 0.25), 0.25);
        assert_eq!(combine_fraction(3, 0.0), 3.0);
    }

    #[test]
    fn test_split_decimal_exact() {
        assert_eq!(split_decimal(2.5), (2, 0.5));
        assert_eq!(split_decimal(0.75), (0, 0.75));
        assert_eq!(split_decimal(4.0), (4, 0.0));
    }

    #[test]
    fn test_split_decimal_snaps_to_nearest() {
        // 0.332 is within tolerance of 1/3
        let (whole, fraction) = split_decimal(1.332);
        assert_eq!(whole, 1);
        assert_eq!(fraction, 0.333333);
    }

    #[test]
    fn test_split_decimal_discards_far_remainders() {
        // 0.05 is not close to any table entry
        assert_eq!(split_decimal(2.05), (2, 0.0));
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(fraction_display(0.5), Some("1/2"));
        assert_eq!(fraction_display(0.333333), Some("1/3"));
        assert_eq!(fraction_display(0.4), None);
        assert_eq!(fraction_display(0.0), None);
    }

    #[test]
    fn test_round_trip_through_display() {
        for fraction in &COMMON_FRACTIONS {
            assert_eq!(fraction_display(fraction.decimal), Some(fraction.display));
        }
    }
}
