//! Saved (favourite) recipe models

use serde::{Deserialize, Serialize};

/// A recipe the current user saved on the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    /// Row ID of the saved entry
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,

    /// Owner user ID
    #[serde(deserialize_with = "super::string_or_number")]
    pub user_id: String,

    /// ID of the saved recipe
    #[serde(deserialize_with = "super::string_or_number")]
    pub recipe_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Creation timestamp as sent by the backend (ISO 8601)
    #[serde(default)]
    pub created_at: String,
}

/// Entry of the global listing of everyone's saved recipes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedRecipe {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,

    #[serde(deserialize_with = "super::string_or_number")]
    pub recipe_id: String,

    #[serde(deserialize_with = "super::string_or_number")]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Owner details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SharedRecipeOwner>,
}

/// Owner of a shared recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedRecipeOwner {
    pub email: String,
}
