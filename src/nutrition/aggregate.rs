//! Recipe aggregation
//!
//! Sums per-line macro contributions into recipe totals and derives the
//! allergen union across a recipe's ingredients.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Nutrition, Recipe};

use super::converter::conversion_multiplier;

/// Computed nutrition view of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    pub total: Nutrition,
    pub per_serving: Nutrition,
}

/// Aggregate a recipe's lines into total and per-serving macro values
///
/// Each line's quantity is converted into a count of the ingredient's
/// serving units, and the ingredient's macros are scaled by that count.
/// Lines whose ingredient reference did not resolve contribute nothing.
/// Output values are rounded to the nearest whole number; the per-serving
/// figures divide the unrounded sums.
pub fn aggregate(recipe: &Recipe) -> RecipeNutrition {
    let mut sum = Nutrition::zero();

    for line in &recipe.ingredients {
        if let Some(ingredient) = &line.ingredient {
            let multiplier = conversion_multiplier(
                ingredient.serving_unit_or_default(),
                line.quantity,
                line.unit,
            );
            sum = sum + ingredient.macros().scale(multiplier);
        }
    }

    // Servings is treated as at least 1 to guard the division
    let servings = f64::from(recipe.servings.max(1));

    RecipeNutrition {
        total: sum.rounded(),
        per_serving: sum.scale(1.0 / servings).rounded(),
    }
}

/// Union of allergen tags across the recipe's resolvable ingredients
///
/// Deduplicated case-sensitively and sorted ascending. Distinct from the
/// recipe's stored allergen list, which the application layer may not have
/// refreshed since the last ingredient edit.
pub fn recipe_allergens(recipe: &Recipe) -> Vec<String> {
    let mut allergens = BTreeSet::new();

    for line in &recipe.ingredients {
        if let Some(ingredient) = &line.ingredient {
            for allergen in &ingredient.allergens {
                allergens.insert(allergen.clone());
            }
        }
    }

    allergens.into_iter().collect()
}
