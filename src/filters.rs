//! List filtering and sorting
//!
//! Filters and orders ingredient and recipe collections for the list views:
//! text search, dietary-restriction exclusion, calorie range, then a stable
//! sort by the selected key.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Ingredient, Recipe};

/// Sort key for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "calories")]
    Calories,
    #[serde(rename = "calories-desc")]
    CaloriesDesc,
    #[serde(rename = "protein")]
    Protein,
    #[serde(rename = "protein-desc")]
    ProteinDesc,
    #[serde(rename = "recent")]
    Recent,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::Calories => "calories",
            SortKey::CaloriesDesc => "calories-desc",
            SortKey::Protein => "protein",
            SortKey::ProteinDesc => "protein-desc",
            SortKey::Recent => "recent",
        }
    }

    /// Parse from string; unrecognized keys fall back to name ascending
    pub fn from_str(s: &str) -> Self {
        match s {
            "name-desc" => SortKey::NameDesc,
            "calories" => SortKey::Calories,
            "calories-desc" => SortKey::CaloriesDesc,
            "protein" => SortKey::Protein,
            "protein-desc" => SortKey::ProteinDesc,
            "recent" => SortKey::Recent,
            _ => SortKey::Name,
        }
    }
}

/// Filter and sort criteria held by a list view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub search_query: String,
    /// Labels of the form "<Allergen>-Free"; combined with AND
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub calories_min: Option<f64>,
    #[serde(default)]
    pub calories_max: Option<f64>,
}

/// Summary statistics over an ingredient collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientStats {
    pub total_ingredients: usize,
    pub with_allergens: usize,
    pub unique_brands: usize,
    pub avg_calories: f64,
}

/// Filter and sort ingredients based on the provided criteria
pub fn filter_ingredients(ingredients: &[Ingredient], filters: &Filters) -> Vec<Ingredient> {
    let query = normalized_query(&filters.search_query);

    let mut filtered: Vec<Ingredient> = ingredients
        .iter()
        .filter(|ingredient| {
            query.as_deref().map_or(true, |q| {
                contains_ci(&ingredient.name, q)
                    || ingredient.brand.as_deref().map_or(false, |b| contains_ci(b, q))
                    || ingredient.allergens.iter().any(|a| contains_ci(a, q))
            })
        })
        .filter(|ingredient| passes_restrictions(&ingredient.allergens, &filters.dietary_restrictions))
        .filter(|ingredient| in_calorie_range(ingredient.macros().calories, filters))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| match filters.sort_by {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::NameDesc => compare_names(&b.name, &a.name),
        SortKey::Calories => a.macros().calories.total_cmp(&b.macros().calories),
        SortKey::CaloriesDesc => b.macros().calories.total_cmp(&a.macros().calories),
        SortKey::Protein => a.macros().protein.total_cmp(&b.macros().protein),
        SortKey::ProteinDesc => b.macros().protein.total_cmp(&a.macros().protein),
        // Newer records carry lexicographically larger ids
        SortKey::Recent => b.id.cmp(&a.id),
    });

    filtered
}

/// Filter and sort recipes based on the provided criteria
pub fn filter_recipes(recipes: &[Recipe], filters: &Filters) -> Vec<Recipe> {
    let query = normalized_query(&filters.search_query);

    let mut filtered: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| {
            query.as_deref().map_or(true, |q| {
                contains_ci(&recipe.name, q)
                    || recipe.description.as_deref().map_or(false, |d| contains_ci(d, q))
            })
        })
        .filter(|recipe| recipe_passes_restrictions(recipe, &filters.dietary_restrictions))
        .filter(|recipe| in_calorie_range(recipe_total_calories(recipe), filters))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| match filters.sort_by {
        SortKey::NameDesc => compare_names(&b.name, &a.name),
        SortKey::Calories => recipe_total_calories(a).total_cmp(&recipe_total_calories(b)),
        SortKey::CaloriesDesc => recipe_total_calories(b).total_cmp(&recipe_total_calories(a)),
        // protein and recency sorts apply only to ingredient lists
        _ => compare_names(&a.name, &b.name),
    });

    filtered
}

/// Distinct allergen names across the given ingredients, sorted
pub fn unique_allergens(ingredients: &[Ingredient]) -> Vec<String> {
    let mut allergens = BTreeSet::new();
    for ingredient in ingredients {
        for allergen in &ingredient.allergens {
            allergens.insert(allergen.clone());
        }
    }
    allergens.into_iter().collect()
}

/// Dietary-restriction labels derived from the allergens present in the
/// given ingredients ("Dairy" becomes "Dairy-Free"), sorted
pub fn dietary_restrictions_from_allergens(ingredients: &[Ingredient]) -> Vec<String> {
    unique_allergens(ingredients)
        .into_iter()
        .map(|allergen| format!("{}-Free", allergen))
        .collect()
}

/// Summary statistics for an ingredient collection
pub fn ingredient_stats(ingredients: &[Ingredient]) -> IngredientStats {
    if ingredients.is_empty() {
        return IngredientStats::default();
    }

    let with_allergens = ingredients
        .iter()
        .filter(|i| !i.allergens.is_empty())
        .count();

    let unique_brands = ingredients
        .iter()
        .filter_map(|i| i.brand.as_deref())
        .collect::<BTreeSet<_>>()
        .len();

    let total_calories: f64 = ingredients.iter().map(|i| i.macros().calories).sum();
    let avg_calories = (total_calories / ingredients.len() as f64).round();

    IngredientStats {
        total_ingredients: ingredients.len(),
        with_allergens,
        unique_brands,
        avg_calories,
    }
}

/// Search query lowered and trimmed; `None` when blank (search is a no-op)
fn normalized_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match; `needle` must already be lowercase
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// True when none of the allergens match any restricted allergen name
fn passes_restrictions(allergens: &[String], restrictions: &[String]) -> bool {
    restrictions.iter().all(|restriction| {
        let avoid = restricted_allergen(restriction);
        !allergens.iter().any(|allergen| contains_ci(allergen, &avoid))
    })
}

/// True when no constituent ingredient carries a restricted allergen
fn recipe_passes_restrictions(recipe: &Recipe, restrictions: &[String]) -> bool {
    restrictions.iter().all(|restriction| {
        let avoid = restricted_allergen(restriction);
        recipe.ingredients.iter().all(|line| {
            line.ingredient.as_ref().map_or(true, |ingredient| {
                !ingredient
                    .allergens
                    .iter()
                    .any(|allergen| contains_ci(allergen, &avoid))
            })
        })
    })
}

/// Allergen name to avoid, extracted from a "<Allergen>-Free" label
fn restricted_allergen(restriction: &str) -> String {
    restriction
        .strip_suffix("-Free")
        .unwrap_or(restriction)
        .to_lowercase()
}

fn in_calorie_range(calories: f64, filters: &Filters) -> bool {
    if let Some(min) = filters.calories_min {
        if calories < min {
            return false;
        }
    }
    if let Some(max) = filters.calories_max {
        if calories > max {
            return false;
        }
    }
    true
}

/// Quantity-weighted calorie total used by the list views
///
/// Skips unit conversion and serving division; list filtering and sorting
/// band recipes on this shortcut figure, not on full aggregation.
fn recipe_total_calories(recipe: &Recipe) -> f64 {
    recipe
        .ingredients
        .iter()
        .filter_map(|line| {
            line.ingredient
                .as_ref()
                .map(|ingredient| ingredient.macros().calories * line.quantity)
        })
        .sum()
}
