//! Nutrikit
//!
//! Pure computation core for nutrition tracking: unit conversion, recipe
//! nutrition aggregation, allergen derivation, and list filtering.

pub mod filters;
pub mod models;
pub mod nutrition;
