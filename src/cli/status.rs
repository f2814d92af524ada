//! Status command implementation

use colored::Colorize;

use crate::cli::context::{data_dir, resolve_format};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ecochef::DEFAULT_API_URL;
use crate::config::Config;
use crate::error::Result;
use crate::output::json;
use crate::recent::MAX_RECENT_RECIPES;
use crate::storage::SqliteStore;
use crate::translate::dictionary;
use crate::translate::mymemory::DEFAULT_TRANSLATION_URL;

/// Display configuration, session and local storage status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_from(&config_path)?;

    let api_url = opts
        .api_url_ref()
        .or(config.api_url.as_deref())
        .unwrap_or(DEFAULT_API_URL)
        .to_string();
    let translation_url = config
        .translation_url
        .as_deref()
        .unwrap_or(DEFAULT_TRANSLATION_URL)
        .to_string();
    let db_path = data_dir(opts)
        .map(|dir| SqliteStore::db_path(&dir).display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let recent_count = crate::cli::context::recent_ledger(opts).get_all().len();

    if resolve_format(opts.format, &config) == OutputFormat::Json {
        let output = serde_json::json!({
            "config_path": config_path.display().to_string(),
            "config_exists": config_path.exists(),
            "session_active": config.has_active_session(),
            "api_url": api_url,
            "translation_url": translation_url,
            "languages": format!("{}|{}", config.preferences.source_lang, config.preferences.target_lang),
            "storage_path": db_path,
            "recent_recipes": recent_count,
            "dictionary_entries": dictionary::len(),
        });
        println!("{}", json::format_json(&output)?);
        return Ok(());
    }

    println!("{}\n", "EcoChef Status".bold());

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }
    println!();

    crate::cli::session::print_session_lines(&config);

    println!("{} API: {}", "○".dimmed(), api_url.cyan());
    println!("{} Translator: {}", "○".dimmed(), translation_url.cyan());
    println!(
        "{} Title language: {} → {}",
        "○".dimmed(),
        config.preferences.source_lang,
        config.preferences.target_lang
    );
    println!(
        "{} Recent recipes: {}/{} ({})",
        "○".dimmed(),
        recent_count,
        MAX_RECENT_RECIPES,
        db_path.dimmed()
    );
    println!(
        "{} Ingredient dictionary: {} entries",
        "○".dimmed(),
        dictionary::len()
    );
    println!();

    Ok(())
}
