//! Configuration management for EcoChef

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// EcoChef backend base URL (without the `/api` prefix)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Translation endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_url: Option<String>,

    /// Signed-in session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Session issued by the EcoChef auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token
    pub token: String,

    /// Backend user ID, needed to list saved recipes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Token expiry, read from the JWT `exp` claim when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Language recipe titles come in
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// Language recipe titles are shown in
    #[serde(default = "default_target_lang")]
    pub target_lang: String,

    #[serde(default = "default_translation_timeout")]
    pub translation_timeout_secs: u64,

    #[serde(default = "default_backend_timeout")]
    pub backend_timeout_secs: u64,
}

fn default_source_lang() -> String {
    crate::translate::DEFAULT_SOURCE_LANG.to_string()
}

fn default_target_lang() -> String {
    crate::translate::DEFAULT_TARGET_LANG.to_string()
}

fn default_translation_timeout() -> u64 {
    crate::translate::mymemory::DEFAULT_TIMEOUT.as_secs()
}

fn default_backend_timeout() -> u64 {
    crate::client::ecochef::DEFAULT_TIMEOUT.as_secs()
}

/// Shortest timeout accepted from the config file
const MIN_TIMEOUT_SECS: u64 = 1;

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            translation_timeout_secs: default_translation_timeout(),
            backend_timeout_secs: default_backend_timeout(),
        }
    }
}

impl Preferences {
    /// Raise zero timeouts, which would fail every request, to the minimum
    fn clamp_timeouts(&mut self) {
        for (name, secs) in [
            ("translation_timeout_secs", &mut self.translation_timeout_secs),
            ("backend_timeout_secs", &mut self.backend_timeout_secs),
        ] {
            if *secs < MIN_TIMEOUT_SECS {
                log::warn!("{} must be at least {}s", name, MIN_TIMEOUT_SECS);
                *secs = MIN_TIMEOUT_SECS;
            }
        }
    }
}

impl Session {
    /// Build a session from a raw token, reading its expiry if it is a JWT
    pub fn new(token: impl Into<String>, user_id: Option<String>) -> Self {
        let token = token.into();
        let expires_at = jwt_expiry(&token);
        Self {
            token,
            user_id,
            expires_at,
        }
    }

    /// Whether the token is past its expiry. Tokens without one never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// Read the `exp` claim of a JWT without verifying its signature
pub fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?.as_i64()?;
    Utc.timestamp_opt(exp, 0).single()
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ecochef").join("config.yaml"))
    }

    /// Resolve the config path, preferring an explicit override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.preferences.clamp_timeouts();

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Session usable for backend calls, if any
    pub fn active_session(&self) -> Option<&Session> {
        self.session
            .as_ref()
            .filter(|s| !s.token.trim().is_empty() && !s.is_expired())
    }

    pub fn has_active_session(&self) -> bool {
        self.active_session().is_some()
    }

    /// Require an active session
    pub fn require_session(&self) -> Result<&Session> {
        self.active_session()
            .ok_or_else(|| ConfigError::MissingSession.into())
    }

    /// Require an active session carrying a user ID
    pub fn require_user_id(&self) -> Result<&str> {
        self.require_session()?
            .user_id
            .as_deref()
            .ok_or_else(|| ConfigError::MissingUserId.into())
    }
}
