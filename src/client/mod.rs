//! EcoChef backend API client

use async_trait::async_trait;

use crate::error::Result;

pub mod ecochef;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use ecochef::EcoChefClient;
#[cfg(test)]
pub use mock::MockRecipeClient;
pub use models::{Recipe, SavedRecipe, SharedRecipe, User};

/// EcoChef backend API.
///
/// Calls carry the session's bearer token when one is set. Failures
/// surface to the caller unchanged; there is no retry.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes matching the given English ingredient terms.
    ///
    /// An empty vector is a valid answer ("no matches"), not an error.
    async fn search_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>>;

    /// Fetch full details of one recipe
    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe>;

    /// Save a recipe as a favourite of the session user
    async fn save_recipe(&self, recipe: &Recipe) -> Result<serde_json::Value>;

    /// List the recipes saved by a user
    async fn list_saved_recipes(&self, user_id: &str) -> Result<Vec<SavedRecipe>>;

    /// Remove a recipe from the session user's favourites
    async fn delete_recipe(&self, recipe_id: &str) -> Result<serde_json::Value>;

    /// List every user's saved recipes
    async fn list_shared_recipes(&self) -> Result<Vec<SharedRecipe>>;

    /// Account the session token belongs to
    async fn current_user(&self) -> Result<User>;
}
