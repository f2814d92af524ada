//! Global CLI options shared across all commands
//!
//! Precedence for every option is: CLI flag > environment variable > config
//! file > default. This struct captures the CLI/env layer; config file values
//! are applied later in `CommandContext`.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.ecochef/config.yaml)
    pub config: Option<String>,

    /// Backend base URL override
    pub api_url: Option<String>,

    /// Local storage directory override
    pub data_dir: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get storage directory override as `Option<&str>`.
    pub fn data_dir_ref(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }
}
