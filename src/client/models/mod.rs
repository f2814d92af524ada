//! EcoChef API data models
//!
//! Domain types exchanged with the EcoChef backend, organized by resource.

mod recipe;
mod saved;
mod user;

pub use recipe::{Ingredient, IngredientMeasure, Recipe};
pub use saved::{SavedRecipe, SharedRecipe, SharedRecipeOwner};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Accept an identifier sent either as a JSON string or a number
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
