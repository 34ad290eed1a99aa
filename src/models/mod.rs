//! Data models
//!
//! Plain data records exchanged with the surrounding application layers.

mod ingredient;
mod nutrition;
mod recipe;

pub use ingredient::Ingredient;
pub use nutrition::Nutrition;
pub use recipe::{Recipe, RecipeLine};
