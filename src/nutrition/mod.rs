//! Nutrition calculation module
//!
//! Handles unit conversion, recipe aggregation, and fraction entry.

pub mod aggregate;
pub mod converter;
pub mod fractions;
pub mod units;

pub use aggregate::{aggregate, recipe_allergens, RecipeNutrition};
pub use converter::{conversion_multiplier, try_conversion_multiplier, ConversionError};
pub use fractions::{
    combine_fraction, fraction_display, is_fractionable, split_decimal, CommonFraction,
    COMMON_FRACTIONS,
};
pub use units::{Unit, UnitGroup, G_PER_LB, G_PER_OZ, ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP};
