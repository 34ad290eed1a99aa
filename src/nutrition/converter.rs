//! Unit conversion
//!
//! Expresses a recipe-line quantity as a multiple of an ingredient's
//! serving unit.

use thiserror::Error;

use super::units::Unit;

/// Error for conversions across incompatible unit groups
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot express {quantity_unit} ({quantity}) in {target_unit}: units are in different groups")]
    IncompatibleGroups {
        target_unit: Unit,
        quantity: f64,
        quantity_unit: Unit,
    },
}

/// Convert a quantity into a count of target units
///
/// Returns an error when the units belong to different compatibility groups,
/// so the caller can surface the mismatch instead of miscomputing.
pub fn try_conversion_multiplier(
    target_unit: Unit,
    quantity: f64,
    quantity_unit: Unit,
) -> Result<f64, ConversionError> {
    // Identical units skip the float round-trip through the magnitude table
    if target_unit == quantity_unit {
        return Ok(quantity);
    }

    if target_unit.group() != quantity_unit.group() {
        return Err(ConversionError::IncompatibleGroups {
            target_unit,
            quantity,
            quantity_unit,
        });
    }

    Ok(quantity * quantity_unit.base_magnitude() / target_unit.base_magnitude())
}

/// Lenient conversion used by the aggregation paths
///
/// Incompatible groups fall back to the quantity unchanged so a save is
/// never blocked by a unit mismatch; the fallback is logged.
pub fn conversion_multiplier(target_unit: Unit, quantity: f64, quantity_unit: Unit) -> f64 {
    match try_conversion_multiplier(target_unit, quantity, quantity_unit) {
        Ok(multiplier) => multiplier,
        Err(_) => {
            tracing::warn!(
                "Unit conversion fallback: '{}' vs '{}'. Treating {} as servings.",
                quantity_unit,
                target_unit,
                quantity
            );
            quantity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::units::{G_PER_OZ, ML_PER_CUP, ML_PER_TBSP};

    #[test]
    fn test_identity_conversion() {
        for unit in Unit::ALL {
            assert_eq!(conversion_multiplier(unit, 2.5, unit), 2.5);
        }
    }

    #[test]
    fn test_volume_to_base() {
        // 2 cups of an ml-serving-sized ingredient
        let mult = conversion_multiplier(Unit::Milliliter, 2.0, Unit::Cup);
        assert!((mult - 2.0 * ML_PER_CUP).abs() < 0.001);
    }

    #[test]
    fn test_volume_within_group() {
        // 1 cup expressed in tablespoons
        let mult = conversion_multiplier(Unit::Tablespoon, 1.0, Unit::Cup);
        assert!((mult - ML_PER_CUP / ML_PER_TBSP).abs() < 0.001);
    }

    #[test]
    fn test_weight_within_group() {
        // 100g of an oz-serving-sized ingredient
        let mult = conversion_multiplier(Unit::Ounce, 100.0, Unit::Gram);
        assert!((mult - 100.0 / G_PER_OZ).abs() < 0.001);
    }

    #[test]
    fn test_round_trip_within_group() {
        let there = conversion_multiplier(Unit::Pound, 3.0, Unit::Ounce);
        let back = conversion_multiplier(Unit::Ounce, there, Unit::Pound);
        assert!((back - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_group_fallback() {
        // Weight quantity against a count serving unit returns the quantity unchanged
        assert_eq!(conversion_multiplier(Unit::Gram, 5.0, Unit::Count), 5.0);
        assert_eq!(conversion_multiplier(Unit::Gram, 2.0, Unit::Cup), 2.0);
    }

    #[test]
    fn test_strict_cross_group_errors() {
        let result = try_conversion_multiplier(Unit::Gram, 2.0, Unit::Cup);
        assert_eq!(
            result,
            Err(ConversionError::IncompatibleGroups {
                target_unit: Unit::Gram,
                quantity: 2.0,
                quantity_unit: Unit::Cup,
            })
        );
    }

    #[test]
    fn test_strict_same_group_succeeds() {
        let mult = try_conversion_multiplier(Unit::Teaspoon, 1.0, Unit::Tablespoon);
        assert!((mult.unwrap() - 3.0).abs() < 0.001);
    }
}
