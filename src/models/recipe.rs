//! Recipe model
//!
//! A recipe with its ordered ingredient lines. The stored allergen list is
//! denormalized by the application layer and may lag the computed union.

use serde::{Deserialize, Serialize};

use crate::nutrition::Unit;

use super::Ingredient;

/// One ingredient-quantity-unit entry within a recipe
///
/// The line unit may differ from the ingredient's serving unit as long as
/// both are in the same compatibility group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeLine {
    pub ingredient_id: String,
    /// Resolved ingredient record; `None` when the reference is dangling
    #[serde(default)]
    pub ingredient: Option<Ingredient>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
}

/// A recipe composed of ingredient lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Portions this recipe yields
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeLine>,
    /// Allergen tags saved with the recipe; possibly stale, prefer
    /// [`recipe_allergens`](crate::nutrition::recipe_allergens)
    #[serde(default)]
    pub allergens: Vec<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

fn default_servings() -> u32 {
    1
}
