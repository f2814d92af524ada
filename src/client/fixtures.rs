//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::{IngredientMeasure, Recipe, SavedRecipe, SharedRecipe, SharedRecipeOwner};

// ============================================================================
// RecipeBuilder
// ============================================================================

/// Builder for creating test Recipe instances.
///
/// # Example
/// ```ignore
/// let recipe = RecipeBuilder::new(716429)
///     .title("Pasta with Garlic")
///     .ready_in_minutes(45)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: u64) -> Self {
        let mut recipe = Recipe::new(id, format!("Recipe {}", id));
        recipe.image = format!("https://img.example/{}.jpg", id);
        Self { recipe }
    }

    /// Set the recipe title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.recipe.title = title.into();
        self
    }

    /// Set the preparation time.
    pub fn ready_in_minutes(mut self, minutes: u32) -> Self {
        self.recipe.ready_in_minutes = Some(minutes);
        self
    }

    /// Set the servings.
    pub fn servings(mut self, servings: u32) -> Self {
        self.recipe.servings = Some(servings);
        self
    }

    /// Set used/missed ingredient counts.
    pub fn ingredient_counts(mut self, used: u32, missed: u32) -> Self {
        self.recipe.used_ingredient_count = Some(used);
        self.recipe.missed_ingredient_count = Some(missed);
        self
    }

    /// Set the instruction steps.
    pub fn instructions(mut self, steps: &[&str]) -> Self {
        self.recipe.instructions = Some(steps.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add a structured ingredient measure.
    pub fn measure(mut self, name: &str, amount: f64, unit: &str) -> Self {
        self.recipe
            .ingredient_measures
            .get_or_insert_with(Vec::new)
            .push(IngredientMeasure {
                name: name.to_string(),
                amount,
                unit: unit.to_string(),
            });
        self
    }

    /// Set the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.recipe.summary = Some(summary.into());
        self
    }

    /// Build the Recipe.
    pub fn build(self) -> Recipe {
        self.recipe
    }
}

// ============================================================================
// SavedRecipeBuilder
// ============================================================================

/// Builder for creating test SavedRecipe instances.
#[derive(Debug, Clone)]
pub struct SavedRecipeBuilder {
    saved: SavedRecipe,
}

impl SavedRecipeBuilder {
    /// Create a new builder for a user's saved recipe.
    pub fn new(user_id: impl Into<String>, recipe_id: impl Into<String>) -> Self {
        let recipe_id = recipe_id.into();
        Self {
            saved: SavedRecipe {
                id: format!("saved-{}", recipe_id),
                user_id: user_id.into(),
                title: Some(format!("Recipe {}", recipe_id)),
                recipe_id,
                image: None,
                created_at: "2026-10-01T12:00:00.000Z".to_string(),
            },
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.saved.title = Some(title.into());
        self
    }

    /// Build the SavedRecipe.
    pub fn build(self) -> SavedRecipe {
        self.saved
    }
}

/// Create a shared recipe owned by `email`.
pub fn shared_recipe(recipe_id: &str, title: &str, email: &str) -> SharedRecipe {
    SharedRecipe {
        id: format!("shared-{}", recipe_id),
        recipe_id: recipe_id.to_string(),
        user_id: format!("user-{}", email),
        title: Some(title.to_string()),
        image: None,
        user: Some(SharedRecipeOwner {
            email: email.to_string(),
        }),
    }
}

/// Create `count` recipes with sequential IDs starting at `start`.
pub fn recipes(start: u64, count: u64) -> Vec<Recipe> {
    (start..start + count)
        .map(|id| RecipeBuilder::new(id).build())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_builder_defaults() {
        let recipe = RecipeBuilder::new(3).build();

        assert_eq!(recipe.id, 3);
        assert_eq!(recipe.title, "Recipe 3");
        assert!(recipe.image.ends_with("3.jpg"));
    }

    #[test]
    fn test_recipe_builder_measures_accumulate() {
        let recipe = RecipeBuilder::new(1)
            .measure("tomato", 2.0, "units")
            .measure("salt", 1.0, "tsp")
            .build();

        assert_eq!(recipe.ingredient_measures.unwrap().len(), 2);
    }

    #[test]
    fn test_recipes_sequence() {
        let list = recipes(10, 3);
        let ids: Vec<u64> = list.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }
}
