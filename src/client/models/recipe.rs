//! Recipe models

use serde::{Deserialize, Serialize};

/// Recipe as returned by the search and detail endpoints.
///
/// Only `title` is ever rewritten on the client (by translation); `id` and
/// the structural fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe ID (stable across translation)
    pub id: u64,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,

    /// Dish type (e.g. "main course")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub dish_type: Option<String>,

    /// Plain ingredient lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    /// Structured ingredient quantities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_measures: Option<Vec<IngredientMeasure>>,

    /// Preparation steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,

    /// Summary (may contain HTML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// How many of the searched ingredients the recipe uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_ingredient_count: Option<u32>,

    /// How many extra ingredients the recipe needs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_ingredient_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_ingredients: Option<Vec<Ingredient>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_ingredients: Option<Vec<Ingredient>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused_ingredients: Option<Vec<Ingredient>>,
}

/// Quantity of one ingredient in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMeasure {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

/// Ingredient summary attached to search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    /// Create a recipe with only identity and title set.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: String::new(),
            description: None,
            ready_in_minutes: None,
            dish_type: None,
            ingredients: None,
            ingredient_measures: None,
            instructions: None,
            summary: None,
            servings: None,
            used_ingredient_count: None,
            missed_ingredient_count: None,
            missed_ingredients: None,
            used_ingredients: None,
            unused_ingredients: None,
        }
    }
}
