//! Recipe detail and save commands

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{Recipe, RecipeApi};
use crate::error::Result;
use crate::output::formatters::{format_amount, format_minutes, strip_html};
use crate::output::{json, table};

/// Show one recipe
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching recipe {}", id);
    let recipe = ctx.client.get_recipe(id).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&recipe)?),
        OutputFormat::Table => println!("{}", table::format_record(&record_fields(&recipe))),
        OutputFormat::Pretty => print_pretty(&recipe),
    }

    Ok(())
}

/// Save a recipe to the session user's favourites.
///
/// A recipe seen in a recent search is saved as shown there (translated
/// title); otherwise its detail is fetched from the backend.
pub async fn save(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_session()?;

    let recipe = match find_recent(&ctx, id) {
        Some(recipe) => {
            debug!("Saving recipe {} from recent searches", id);
            recipe
        }
        None => ctx.client.get_recipe(id).await?,
    };

    let ack = ctx.client.save_recipe(&recipe).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&ack)?),
        _ => println!(
            "{} Receta guardada: {} {}",
            "✓".green(),
            recipe.title.bold(),
            format!("#{}", recipe.id).dimmed()
        ),
    }

    Ok(())
}

fn find_recent(ctx: &CommandContext, id: &str) -> Option<Recipe> {
    let id: u64 = id.trim().parse().ok()?;
    ctx.recent()
        .get_all()
        .into_iter()
        .find(|entry| entry.recipe.id == id)
        .map(|entry| entry.recipe)
}

fn record_fields(recipe: &Recipe) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("ID", recipe.id.to_string()),
        ("Title", recipe.title.clone()),
        ("Time", format_minutes(recipe.ready_in_minutes)),
    ];
    if let Some(servings) = recipe.servings {
        fields.push(("Servings", servings.to_string()));
    }
    if let Some(dish_type) = &recipe.dish_type {
        fields.push(("Type", dish_type.clone()));
    }
    let ingredients = ingredient_lines(recipe);
    if !ingredients.is_empty() {
        fields.push(("Ingredients", ingredients.join("\n")));
    }
    if let Some(steps) = &recipe.instructions {
        let steps: Vec<String> = steps
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, strip_html(s)))
            .collect();
        fields.push(("Instructions", steps.join("\n")));
    }
    if !recipe.image.is_empty() {
        fields.push(("Image", recipe.image.clone()));
    }
    fields
}

/// Structured measures when present, plain ingredient lines otherwise
fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
    match (&recipe.ingredient_measures, &recipe.ingredients) {
        (Some(measures), _) if !measures.is_empty() => measures
            .iter()
            .map(|m| format!("{} {}", format_amount(m.amount, &m.unit), m.name))
            .collect(),
        (_, Some(lines)) => lines.clone(),
        _ => Vec::new(),
    }
}

fn print_pretty(recipe: &Recipe) {
    println!("{} {}", recipe.title.bold(), format!("#{}", recipe.id).dimmed());

    let mut details = vec![format_minutes(recipe.ready_in_minutes)];
    if let Some(servings) = recipe.servings {
        details.push(format!("{} porciones", servings));
    }
    if let Some(dish_type) = &recipe.dish_type {
        details.push(dish_type.clone());
    }
    println!("{}\n", details.join(" · ").dimmed());

    if let Some(summary) = recipe.summary.as_deref().or(recipe.description.as_deref()) {
        println!("{}\n", strip_html(summary));
    }

    let ingredients = ingredient_lines(recipe);
    if !ingredients.is_empty() {
        println!("{}", "Ingredientes".bold().green());
        for line in ingredients {
            println!("  • {}", line);
        }
        println!();
    }

    if let Some(steps) = &recipe.instructions {
        println!("{}", "Preparación".bold().green());
        for (i, step) in steps.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, strip_html(step));
        }
        println!();
    }

    if !recipe.image.is_empty() {
        println!("{} {}", "Imagen:".dimmed(), recipe.image.cyan());
    }
}
