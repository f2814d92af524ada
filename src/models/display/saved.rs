//! Saved and shared recipe display models

use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::{SavedRecipe, SharedRecipe};
use crate::output::formatters::format_iso_local;

const TITLE_WIDTH: usize = 48;

fn title_or_placeholder(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.trim().is_empty() => truncate_string(t, TITLE_WIDTH),
        _ => "(sin título)".to_string(),
    }
}

/// Saved recipe row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SavedRecipeDisplay {
    #[tabled(rename = "RECIPE ID")]
    pub recipe_id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "SAVED")]
    pub saved: String,
}

impl From<SavedRecipe> for SavedRecipeDisplay {
    fn from(saved: SavedRecipe) -> Self {
        Self {
            title: title_or_placeholder(saved.title.as_deref()),
            saved: format_iso_local(&saved.created_at),
            recipe_id: saved.recipe_id,
        }
    }
}

/// Shared listing row
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SharedRecipeDisplay {
    #[tabled(rename = "RECIPE ID")]
    pub recipe_id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "SAVED BY")]
    pub saved_by: String,
}

impl From<SharedRecipe> for SharedRecipeDisplay {
    fn from(shared: SharedRecipe) -> Self {
        Self {
            title: title_or_placeholder(shared.title.as_deref()),
            saved_by: shared
                .user
                .map(|u| u.email)
                .unwrap_or_else(|| shared.user_id.clone()),
            recipe_id: shared.recipe_id,
        }
    }
}
