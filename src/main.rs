//! EcoChef CLI - find recipes with the ingredients you have at home

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod recent;
mod search;
mod storage;
mod translate;

use cli::{
    Cli, Commands, GlobalOptions, RecentCommands, RecipeCommands, SavedCommands, SessionCommands,
    SharedCommands,
};
use error::{ApiError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let opts = GlobalOptions::from_cli(&cli);

    if let Err(err) = run(cli.command, &opts).await {
        if matches!(err, Error::Api(ApiError::Unauthorized)) {
            cli::session::clear_rejected(opts.config_ref());
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or crate debug output with `--debug`
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    if debug {
        builder.filter_module("ecochef", LevelFilter::Debug);
    }
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format_timestamp(None).init();
}

async fn run(command: Commands, opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Search { ingredients, limit } => {
            cli::search::run(opts, &ingredients, limit).await
        }
        Commands::Recipe(cmd) => match cmd {
            RecipeCommands::Get { id } => cli::recipe::get(opts, &id).await,
            RecipeCommands::Save { id } => cli::recipe::save(opts, &id).await,
        },
        Commands::Saved(cmd) => match cmd {
            SavedCommands::List { limit } => cli::saved::list(opts, limit).await,
            SavedCommands::Delete { recipe_id, yes } => {
                cli::saved::delete(opts, &recipe_id, yes).await
            }
        },
        Commands::Shared(cmd) => match cmd {
            SharedCommands::List { limit } => cli::shared::list(opts, limit).await,
        },
        Commands::Recent(cmd) => match cmd {
            RecentCommands::List { limit } => cli::recent::list(opts, limit),
            RecentCommands::Clear => cli::recent::clear(opts),
        },
        Commands::Translate { text, from, to } => {
            cli::translate::run(opts, &text, from.as_deref(), to.as_deref()).await
        }
        Commands::Session(cmd) => match cmd {
            SessionCommands::Set { token, user_id } => {
                cli::session::set(opts, token, user_id).await
            }
            SessionCommands::Status => cli::session::status(opts),
            SessionCommands::Clear => cli::session::clear(opts),
        },
        Commands::Status => cli::status::run(opts),
        Commands::Version => {
            println!("ecochef version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
