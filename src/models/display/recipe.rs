//! Recipe display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{count_or_dash, truncate_string};
use crate::client::Recipe;
use crate::output::formatters::{format_millis_local, format_minutes};
use crate::recent::RecentRecipe;

const TITLE_WIDTH: usize = 48;

/// Search result row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecipeDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "SERVINGS")]
    pub servings: String,

    /// Searched ingredients the recipe uses
    #[tabled(rename = "USED")]
    pub used: String,

    /// Extra ingredients needed
    #[tabled(rename = "MISSING")]
    pub missing: String,
}

impl From<&Recipe> for RecipeDisplay {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: truncate_string(&recipe.title, TITLE_WIDTH),
            time: format_minutes(recipe.ready_in_minutes),
            servings: count_or_dash(recipe.servings),
            used: count_or_dash(recipe.used_ingredient_count),
            missing: count_or_dash(recipe.missed_ingredient_count),
        }
    }
}

/// Recently searched recipe row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecentRecipeDisplay {
    #[tabled(rename = "ID")]
    pub id: u64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "SEARCHED")]
    pub searched: String,
}

impl From<&RecentRecipe> for RecentRecipeDisplay {
    fn from(entry: &RecentRecipe) -> Self {
        Self {
            id: entry.recipe.id,
            title: truncate_string(&entry.recipe.title, TITLE_WIDTH),
            time: format_minutes(entry.recipe.ready_in_minutes),
            searched: format_millis_local(entry.searched_at),
        }
    }
}
