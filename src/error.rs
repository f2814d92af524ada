//! Error types for the EcoChef CLI

use thiserror::Error;

/// Result type alias for EcoChef operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Backend API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Your session has expired or was rejected. Run `ecochef session set` to sign in again.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the EcoChef API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No active session. Run `ecochef session set` with the token from your EcoChef account.")]
    MissingSession,

    #[error("Session has no user ID. Run `ecochef session set --user-id <ID>` to add it.")]
    MissingUserId,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Client-local storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine data directory")]
    NoHome,

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Reasons a text came back from the translator untouched.
///
/// These never reach the user as errors; the original text is shown instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("nothing to translate")]
    EmptyInput,

    #[error("translation request timed out")]
    Timeout,

    #[error("translation request failed: {0}")]
    Transport(String),

    #[error("translation endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("translation endpoint returned no usable translation")]
    NoTranslation,

    #[error("translation response could not be parsed: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslateError::Timeout
        } else if err.is_decode() {
            TranslateError::Malformed(err.to_string())
        } else {
            TranslateError::Transport(err.to_string())
        }
    }
}
