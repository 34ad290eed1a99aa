//! Unit types and conversion constants
//!
//! The closed set of measurement units, their compatibility groups, and the
//! fixed magnitude of each unit relative to its group's base unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compatibility group of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitGroup {
    /// Weight/mass units (g, oz, lb)
    Weight,
    /// Volume units (ml, tsp, tbsp, cup)
    Volume,
    /// Count/discrete units
    Count,
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// A measurement unit
///
/// Conversion is defined only between units of the same group; records with
/// no unit default to the discrete count unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "cup")]
    Cup,
    /// Discrete count (eggs, slices)
    #[default]
    #[serde(rename = "unit")]
    Count,
}

impl Unit {
    /// Every supported unit, weight then volume then count
    pub const ALL: [Unit; 8] = [
        Unit::Gram,
        Unit::Ounce,
        Unit::Pound,
        Unit::Milliliter,
        Unit::Teaspoon,
        Unit::Tablespoon,
        Unit::Cup,
        Unit::Count,
    ];

    /// Short unit string as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Milliliter => "ml",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Cup => "cup",
            Unit::Count => "unit",
        }
    }

    /// Parse from string, tolerating common long forms
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "g" | "gram" | "grams" => Some(Unit::Gram),
            "oz" | "ounce" | "ounces" => Some(Unit::Ounce),
            "lb" | "lbs" | "pound" | "pounds" => Some(Unit::Pound),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(Unit::Milliliter)
            }
            "tsp" | "teaspoon" | "teaspoons" => Some(Unit::Teaspoon),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Unit::Tablespoon),
            "cup" | "cups" => Some(Unit::Cup),
            "unit" | "units" | "each" | "piece" | "pieces" | "count" => Some(Unit::Count),
            _ => None,
        }
    }

    /// Compatibility group of this unit
    pub fn group(&self) -> UnitGroup {
        match self {
            Unit::Gram | Unit::Ounce | Unit::Pound => UnitGroup::Weight,
            Unit::Milliliter | Unit::Teaspoon | Unit::Tablespoon | Unit::Cup => UnitGroup::Volume,
            Unit::Count => UnitGroup::Count,
        }
    }

    /// Size of one unit expressed in its group's base unit
    ///
    /// Grams for weight units, milliliters for volume units, 1 for count.
    pub fn base_magnitude(&self) -> f64 {
        match self {
            Unit::Gram => 1.0,
            Unit::Ounce => G_PER_OZ,
            Unit::Pound => G_PER_LB,
            Unit::Milliliter => 1.0,
            Unit::Teaspoon => ML_PER_TSP,
            Unit::Tablespoon => ML_PER_TBSP,
            Unit::Cup => ML_PER_CUP,
            Unit::Count => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
