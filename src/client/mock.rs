//! Mock EcoChef API client for testing
//!
//! Provides a mock implementation of [`RecipeApi`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::models::{Recipe, SavedRecipe, SharedRecipe, User};
use super::RecipeApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockRecipeClient::new()
///     .with_search_results(vec![RecipeBuilder::new(1).title("Soup").build()])
///     .await;
///
/// let recipes = mock.search_recipes(&terms).await?;
/// assert_eq!(recipes.len(), 1);
/// ```
#[derive(Default)]
pub struct MockRecipeClient {
    /// Recipes returned from search_recipes and get_recipe
    recipes: Arc<Mutex<Vec<Recipe>>>,
    /// Saved recipes returned from list_saved_recipes
    saved: Arc<Mutex<Vec<SavedRecipe>>>,
    /// Shared recipes returned from list_shared_recipes
    shared: Arc<Mutex<Vec<SharedRecipe>>>,
    /// User returned from current_user
    user: Arc<Mutex<Option<User>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Ingredient terms received by search_recipes, one entry per call
    searched_terms: Arc<Mutex<Vec<Vec<String>>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search_recipes: usize,
    pub get_recipe: usize,
    pub save_recipe: usize,
    pub list_saved_recipes: usize,
    pub delete_recipe: usize,
    pub list_shared_recipes: usize,
    pub current_user: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.search_recipes
            + self.get_recipe
            + self.save_recipe
            + self.list_saved_recipes
            + self.delete_recipe
            + self.list_shared_recipes
            + self.current_user
    }
}

#[allow(dead_code)]
impl MockRecipeClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure recipes to return from search_recipes.
    pub async fn with_search_results(self, recipes: Vec<Recipe>) -> Self {
        *self.recipes.lock().await = recipes;
        self
    }

    /// Configure saved recipes to return from list_saved_recipes.
    pub async fn with_saved(self, saved: Vec<SavedRecipe>) -> Self {
        *self.saved.lock().await = saved;
        self
    }

    /// Configure shared recipes to return from list_shared_recipes.
    pub async fn with_shared(self, shared: Vec<SharedRecipe>) -> Self {
        *self.shared.lock().await = shared;
        self
    }

    /// Configure the user returned from current_user.
    pub async fn with_user(self, user: User) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Ingredient terms received by each search call.
    pub async fn searched_terms(&self) -> Vec<Vec<String>> {
        self.searched_terms.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeApi for MockRecipeClient {
    async fn search_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>> {
        self.searched_terms.lock().await.push(ingredients.to_vec());
        self.call_count.lock().await.search_recipes += 1;
        self.check_error().await?;

        Ok(self.recipes.lock().await.clone())
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        self.call_count.lock().await.get_recipe += 1;
        self.check_error().await?;

        self.recipes
            .lock()
            .await
            .iter()
            .find(|r| r.id.to_string() == recipe_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Recipe {}", recipe_id)).into())
    }

    async fn save_recipe(&self, recipe: &Recipe) -> Result<serde_json::Value> {
        self.call_count.lock().await.save_recipe += 1;
        self.check_error().await?;

        Ok(serde_json::json!({ "recipeId": recipe.id.to_string() }))
    }

    async fn list_saved_recipes(&self, user_id: &str) -> Result<Vec<SavedRecipe>> {
        self.call_count.lock().await.list_saved_recipes += 1;
        self.check_error().await?;

        Ok(self
            .saved
            .lock()
            .await
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_recipe(&self, recipe_id: &str) -> Result<serde_json::Value> {
        self.call_count.lock().await.delete_recipe += 1;
        self.check_error().await?;

        let mut saved = self.saved.lock().await;
        let before = saved.len();
        saved.retain(|s| s.recipe_id != recipe_id);
        if saved.len() == before {
            return Err(ApiError::NotFound(format!("Saved recipe {}", recipe_id)).into());
        }
        Ok(serde_json::json!({ "message": "deleted" }))
    }

    async fn list_shared_recipes(&self) -> Result<Vec<SharedRecipe>> {
        self.call_count.lock().await.list_shared_recipes += 1;
        self.check_error().await?;

        Ok(self.shared.lock().await.clone())
    }

    async fn current_user(&self) -> Result<User> {
        self.call_count.lock().await.current_user += 1;
        self.check_error().await?;

        self.user
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{RecipeBuilder, SavedRecipeBuilder};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_search_records_terms() {
        let mock = MockRecipeClient::new()
            .with_search_results(vec![RecipeBuilder::new(1).build()])
            .await;

        let terms = vec!["egg".to_string(), "milk".to_string()];
        let recipes = mock.search_recipes(&terms).await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(mock.searched_terms().await, vec![terms]);
        assert_eq!(mock.call_counts().await.search_recipes, 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockRecipeClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        let first = mock.list_shared_recipes().await;
        assert!(matches!(first, Err(Error::Api(ApiError::ServerError(_)))));

        let second = mock.list_shared_recipes().await;
        assert!(second.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_delete_removes_saved_entry() {
        let mock = MockRecipeClient::new()
            .with_saved(vec![
                SavedRecipeBuilder::new("u-1", "10").build(),
                SavedRecipeBuilder::new("u-1", "11").build(),
            ])
            .await;

        mock.delete_recipe("10").await.unwrap();
        let remaining = mock.list_saved_recipes("u-1").await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].recipe_id, "11");
        assert!(mock.delete_recipe("10").await.is_err());
    }
}
