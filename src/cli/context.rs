//! Command execution context
//!
//! Resolves configuration once per invocation and hands out the backend
//! client, the translator and the recent-recipes ledger.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::EcoChefClient;
use crate::config::{Config, Session};
use crate::error::Result;
use crate::recent::RecentRecipes;
use crate::storage::{self, SqliteStore};
use crate::translate::{CachedTranslator, MyMemoryClient};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Backend client, authenticated when a session is stored
    pub client: Arc<EcoChefClient>,
    /// Output format preference
    pub format: OutputFormat,
    /// Global options the context was built from
    pub opts: GlobalOptions,
}

impl CommandContext {
    /// Load config and build the backend client.
    ///
    /// A missing session is not an error here: public endpoints work
    /// without one. Commands that need it call [`Self::require_session`].
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let format = resolve_format(opts.format, &config);
        let token = config.active_session().map(|s| s.token.clone());
        let api_url = opts
            .api_url
            .clone()
            .or_else(|| config.api_url.clone());
        let timeout = Duration::from_secs(config.preferences.backend_timeout_secs);

        let client = Arc::new(EcoChefClient::with_host(token, api_url, timeout)?);
        log::debug!("Using EcoChef API at {}", client.base_url());

        Ok(Self {
            config,
            client,
            format,
            opts: opts.clone(),
        })
    }

    /// Session usable for backend calls
    pub fn require_session(&self) -> Result<&Session> {
        self.config.require_session()
    }

    /// User ID of the stored session
    pub fn require_user_id(&self) -> Result<&str> {
        self.config.require_user_id()
    }

    /// Remote title translator configured from preferences
    pub fn translator(&self) -> Result<CachedTranslator<MyMemoryClient>> {
        let timeout = Duration::from_secs(self.config.preferences.translation_timeout_secs);
        let api = MyMemoryClient::new(self.config.translation_url.clone(), timeout)?;
        Ok(CachedTranslator::new(api))
    }

    /// Recent-recipes ledger over local storage
    pub fn recent(&self) -> RecentRecipes {
        recent_ledger(&self.opts)
    }

    /// Save the config back to where it was loaded from
    pub fn save_config(&self) -> Result<()> {
        self.config.save_at(self.opts.config_ref())
    }
}

/// CLI flag wins, then the config preference, then the default
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_config)
    })
    .unwrap_or_default()
}

/// Ledger for commands that don't touch the backend
pub fn recent_ledger(opts: &GlobalOptions) -> RecentRecipes {
    let dir = opts.data_dir_ref().map(PathBuf::from);
    RecentRecipes::new(storage::open_store(dir.as_deref()))
}

/// Where local data lives for these options
pub fn data_dir(opts: &GlobalOptions) -> Result<PathBuf> {
    match opts.data_dir_ref() {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(SqliteStore::data_dir()?),
    }
}
