//! Recently searched recipes commands

use colored::Colorize;

use crate::cli::context::{recent_ledger, resolve_format};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::models::RecentRecipeDisplay;
use crate::output::{Formattable, json};

/// List the local ledger, newest first
pub fn list(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let format = local_format(opts)?;
    let mut entries = recent_ledger(opts).get_all();
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    match format {
        OutputFormat::Json => println!("{}", json::format_json(&entries)?),
        _ if entries.is_empty() => {
            println!("No hay recetas recientes.");
            println!("  → Busca con {}", "ecochef search <ingredientes>".cyan());
        }
        _ => {
            let rows: Vec<RecentRecipeDisplay> =
                entries.iter().map(RecentRecipeDisplay::from).collect();
            rows.print(format)?;
        }
    }

    Ok(())
}

/// Wipe the local ledger
pub fn clear(opts: &GlobalOptions) -> Result<()> {
    let format = local_format(opts)?;
    let recent = recent_ledger(opts);
    let removed = recent.get_all().len();
    recent.clear();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "entries_removed": removed, "success": true });
            println!("{}", json::format_json(&output)?);
        }
        _ => println!("{} {} recetas recientes eliminadas", "✓".green(), removed),
    }

    Ok(())
}

/// Output format without building a backend client
fn local_format(opts: &GlobalOptions) -> Result<OutputFormat> {
    let config = Config::load_at(opts.config_ref())?;
    Ok(resolve_format(opts.format, &config))
}
