//! Ingredient model
//!
//! An ingredient record as supplied by the persistence layer: macro values
//! per one serving-unit quantity, the serving definition, and allergen tags.

use serde::{Deserialize, Serialize};

use crate::nutrition::Unit;

use super::Nutrition;

/// An ingredient with per-serving nutritional information
///
/// Macro fields are optional on the wire; absent values read as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_unit: Option<Unit>,
    /// Allergen names as entered, case preserved
    #[serde(default)]
    pub allergens: Vec<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Ingredient {
    /// Macro values with missing fields read as zero
    pub fn macros(&self) -> Nutrition {
        Nutrition {
            calories: self.calories.unwrap_or(0.0),
            protein: self.protein.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            carbs: self.carbs.unwrap_or(0.0),
            sugar: self.sugar.unwrap_or(0.0),
        }
    }

    /// Effective serving unit; records without one measure in discrete units
    pub fn serving_unit_or_default(&self) -> Unit {
        self.serving_unit.unwrap_or(Unit::Count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_macros_read_as_zero() {
        let ingredient: Ingredient = serde_json::from_str(
            r#"{
                "id": "ing_1",
                "name": "Water",
                "user_id": "user_1",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(ingredient.macros(), Nutrition::zero());
        assert_eq!(ingredient.serving_unit_or_default(), Unit::Count);
        assert!(ingredient.allergens.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let ingredient: Ingredient = serde_json::from_str(
            r#"{
                "id": "ing_2",
                "name": "Peanut Butter",
                "brand": "Crunchy Co",
                "calories": 190.0,
                "protein": 8.0,
                "fat": 16.0,
                "carbs": 7.0,
                "sugar": 3.0,
                "serving_size": 2.0,
                "serving_unit": "tbsp",
                "allergens": ["Peanuts"],
                "user_id": "user_1",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(ingredient.serving_unit, Some(Unit::Tablespoon));
        assert_eq!(ingredient.macros().calories, 190.0);
        assert_eq!(ingredient.allergens, vec!["Peanuts".to_string()]);
    }

    #[test]
    fn test_unknown_serving_unit_rejected() {
        let result: Result<Ingredient, _> = serde_json::from_str(
            r#"{
                "id": "ing_3",
                "name": "Protein Powder",
                "serving_unit": "scoop",
                "user_id": "user_1",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }"#,
        );
        assert!(result.is_err());
    }
}
