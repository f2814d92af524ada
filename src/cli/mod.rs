//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod recent;
pub mod recipe;
pub mod saved;
pub mod search;
pub mod session;
pub mod shared;
pub mod status;
pub mod translate;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// EcoChef CLI - find recipes with the ingredients you have at home
#[derive(Parser, Debug)]
#[command(name = "ecochef")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ECOCHEF_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ECOCHEF_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// EcoChef backend URL
    #[arg(long, global = true, env = "ECOCHEF_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Directory for local data (recent recipes)
    #[arg(long, global = true, env = "ECOCHEF_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ECOCHEF_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "ECOCHEF_NO_COLOR", hide_env = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search recipes by the ingredients you have (in Spanish)
    #[command(after_help = "\
Examples:
  ecochef search tomate cebolla ajo
  ecochef search \"pollo, arroz, pimiento\" --limit 5")]
    Search {
        /// Ingredients, as separate words or comma-separated (3 to 10)
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Show at most this many recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// View and save individual recipes
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Manage your saved recipes
    #[command(subcommand)]
    Saved(SavedCommands),

    /// Browse recipes saved by every user
    #[command(subcommand)]
    Shared(SharedCommands),

    /// Recently searched recipes kept on this machine
    #[command(subcommand)]
    Recent(RecentCommands),

    /// Translate a text with the remote translator
    Translate {
        /// Text to translate
        text: String,

        /// Source language
        #[arg(long)]
        from: Option<String>,

        /// Target language
        #[arg(long)]
        to: Option<String>,
    },

    /// Manage the EcoChef session token
    #[command(subcommand)]
    Session(SessionCommands),

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   ecochef completion bash > /etc/bash_completion.d/ecochef
  zsh:    ecochef completion zsh > \"${fpath[1]}/_ecochef\"
  fish:   ecochef completion fish > ~/.config/fish/completions/ecochef.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Recipe subcommands
#[derive(Subcommand, Debug)]
pub enum RecipeCommands {
    /// Show a recipe with ingredients and steps
    Get {
        /// Recipe ID
        id: String,
    },

    /// Save a recipe to your favourites
    Save {
        /// Recipe ID
        id: String,
    },
}

/// Saved recipe subcommands
#[derive(Subcommand, Debug)]
pub enum SavedCommands {
    /// List your saved recipes
    List {
        /// Show at most this many recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Remove a recipe from your favourites
    Delete {
        /// Recipe ID
        recipe_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Shared recipe subcommands
#[derive(Subcommand, Debug)]
pub enum SharedCommands {
    /// List every user's saved recipes
    List {
        /// Show at most this many recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}

/// Recent recipe subcommands
#[derive(Subcommand, Debug)]
pub enum RecentCommands {
    /// List recently searched recipes, newest first
    List {
        /// Show at most this many recipes
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Forget all recently searched recipes
    Clear,
}

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Store the token issued by the EcoChef auth service
    Set {
        /// Bearer token (prompted for when omitted)
        #[arg(long, env = "ECOCHEF_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Backend user ID (looked up from the token when omitted)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Show the stored session
    Status,

    /// Forget the stored session
    Clear,
}
