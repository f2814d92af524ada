//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod common;
mod recipe;
mod saved;

pub use recipe::{RecentRecipeDisplay, RecipeDisplay};
pub use saved::{SavedRecipeDisplay, SharedRecipeDisplay};
