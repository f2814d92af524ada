//! Shared recipe listing

use crate::cli::handlers::print_list;
use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{RecipeApi, SharedRecipe};
use crate::error::Result;
use crate::models::SharedRecipeDisplay;

/// List every user's saved recipes
pub async fn list(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let shared = ctx.client.list_shared_recipes().await?;

    print_list::<SharedRecipe, SharedRecipeDisplay>(shared, limit, ctx.format, "shared recipes")
}
