//! Saved recipe commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::handlers::print_list;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{RecipeApi, SavedRecipe};
use crate::error::Result;
use crate::models::SavedRecipeDisplay;

/// List the session user's saved recipes
pub async fn list(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user_id = ctx.require_user_id()?;

    let saved = ctx.client.list_saved_recipes(user_id).await?;

    if saved.is_empty() && ctx.format != OutputFormat::Json {
        println!("Aún no has guardado recetas.");
        println!("  → Usa {} para guardar una", "ecochef recipe save <ID>".cyan());
        return Ok(());
    }

    print_list::<SavedRecipe, SavedRecipeDisplay>(saved, limit, ctx.format, "saved recipes")
}

/// Remove a recipe from the session user's favourites
pub async fn delete(opts: &GlobalOptions, recipe_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    if !yes {
        eprintln!(
            "{} ¿Eliminar la receta {} de tus favoritos?",
            "⚠".yellow(),
            recipe_id
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let ack = ctx.client.delete_recipe(recipe_id).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "deleted": true, "recipeId": recipe_id, "response": ack });
            println!("{}", crate::output::json::format_json(&output)?);
        }
        _ => eprintln!("{} Receta {} eliminada", "✓".green(), recipe_id),
    }

    Ok(())
}
