//! Recipe search command

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::Recipe;
use crate::error::{Error, Result};
use crate::models::RecipeDisplay;
use crate::output::formatters::format_minutes;
use crate::output::{Formattable, json};
use crate::search::{RecipeSearch, SearchReport};

/// Fewest ingredients a search accepts
pub const MIN_INGREDIENTS: usize = 3;

/// Most ingredients a search accepts
pub const MAX_INGREDIENTS: usize = 10;

const NO_RESULTS: &str = "No se encontraron recetas con esos ingredientes. Intenta con otros.";

/// Split arguments on commas and drop blanks.
pub fn parse_ingredients(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Enforce the accepted ingredient count.
pub fn validate_ingredients(ingredients: &[String]) -> Result<()> {
    if ingredients.len() < MIN_INGREDIENTS {
        return Err(Error::Validation(format!(
            "Debes ingresar al menos {} ingredientes",
            MIN_INGREDIENTS
        )));
    }
    if ingredients.len() > MAX_INGREDIENTS {
        return Err(Error::Validation(format!(
            "Puedes ingresar como máximo {} ingredientes",
            MAX_INGREDIENTS
        )));
    }
    Ok(())
}

/// Run the search command
pub async fn run(opts: &GlobalOptions, args: &[String], limit: Option<usize>) -> Result<()> {
    let ingredients = parse_ingredients(args);
    validate_ingredients(&ingredients)?;

    let ctx = CommandContext::new(opts)?;
    let prefs = &ctx.config.preferences;

    let search = RecipeSearch::new(
        ctx.client.clone(),
        Arc::new(ctx.translator()?),
        Arc::new(ctx.recent()),
    )
    .with_languages(prefs.source_lang.clone(), prefs.target_lang.clone());

    let spinner = (ctx.format != OutputFormat::Json).then(|| {
        spinner(&format!("Buscando recetas con {}...", ingredients.join(", ")))
    });

    // Only JSON output reports translation telemetry
    let result = match ctx.format {
        OutputFormat::Json => search.search_detailed(&ingredients).await,
        _ => search.search(&ingredients).await.map(|recipes| SearchReport {
            recipes,
            ..Default::default()
        }),
    };

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let mut report = result?;
    if let Some(limit) = limit {
        report.recipes.truncate(limit);
    }
    debug!("Showing {} recipes", report.recipes.len());

    print_report(&report, ctx.format)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_report(report: &SearchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let meta = serde_json::json!({
                "ingredients": report.terms,
                "translated": report.translated,
                "cached": report.cached,
                "unchanged": report.unchanged,
            });
            println!("{}", json::format_json_with_meta(&report.recipes, meta)?);
        }
        _ if report.recipes.is_empty() => {
            println!("{}", NO_RESULTS.yellow());
        }
        OutputFormat::Table => {
            let rows: Vec<RecipeDisplay> = report.recipes.iter().map(RecipeDisplay::from).collect();
            rows.print(format)?;
        }
        OutputFormat::Pretty => print_pretty(&report.recipes),
    }
    Ok(())
}

fn print_pretty(recipes: &[Recipe]) {
    let noun = if recipes.len() == 1 { "receta encontrada" } else { "recetas encontradas" };
    println!("{}\n", format!("{} {}", recipes.len(), noun).bold());

    for (i, recipe) in recipes.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            recipe.title.bold(),
            format!("#{}", recipe.id).dimmed()
        );

        let mut details = vec![format_minutes(recipe.ready_in_minutes)];
        if let Some(servings) = recipe.servings {
            details.push(format!("{} porciones", servings));
        }
        if let Some(used) = recipe.used_ingredient_count {
            details.push(format!("usa {} de tus ingredientes", used).green().to_string());
        }
        if let Some(missed) = recipe.missed_ingredient_count
            && missed > 0
        {
            details.push(format!("faltan {}", missed).yellow().to_string());
        }
        println!("     {}", details.join(" · "));
    }

    println!(
        "\nVer detalle: {}",
        "ecochef recipe get <ID>".cyan()
    );
}
