//! Cached remote text translation
//!
//! [`CachedTranslator`] wraps any [`TranslationApi`] with an in-memory cache
//! and turns every failure into "keep the original text". Callers that only
//! want display text use [`CachedTranslator::translate`]; callers that want
//! to know what happened use [`CachedTranslator::translate_detailed`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::{debug, warn};

use super::key::translation_key;
use crate::error::TranslateError;

/// Default source language of recipe texts
pub const DEFAULT_SOURCE_LANG: &str = "en";

/// Default language shown to the user
pub const DEFAULT_TARGET_LANG: &str = "es";

/// Remote translation endpoint.
///
/// Implementations perform exactly one outbound call per invocation and
/// report every failure as a [`TranslateError`].
#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> std::result::Result<String, TranslateError>;
}

/// Outcome of one translation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Fresh result from the remote endpoint
    Translated(String),
    /// Served from the in-memory cache
    Cached(String),
    /// Original text kept
    Unchanged {
        text: String,
        reason: TranslateError,
    },
}

impl Translation {
    /// Text to display, whatever the outcome
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text) | Translation::Cached(text) => text,
            Translation::Unchanged { text, .. } => text,
        }
    }

    /// Collapse into the display text
    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) | Translation::Cached(text) => text,
            Translation::Unchanged { text, .. } => text,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Translation::Unchanged { .. })
    }
}

/// Translator with a process-wide in-memory cache.
///
/// Only successful remote results are cached. Two concurrent requests for the
/// same uncached key may both reach the network; the last write wins.
pub struct CachedTranslator<T: TranslationApi> {
    inner: Arc<T>,
    cache: Mutex<HashMap<String, String>>,
}

impl<T: TranslationApi> CachedTranslator<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get the inner translation API
    #[allow(dead_code)]
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Translate `text`, returning the original text on any failure.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        self.translate_detailed(text, source, target)
            .await
            .into_text()
    }

    /// Translate `text` and report how the result was obtained.
    pub async fn translate_detailed(&self, text: &str, source: &str, target: &str) -> Translation {
        if text.is_empty() {
            return Translation::Unchanged {
                text: String::new(),
                reason: TranslateError::EmptyInput,
            };
        }

        let key = translation_key(source, target, text);

        if let Some(cached) = self.get_cached(&key) {
            debug!("Translation cache hit ({}|{})", source, target);
            return Translation::Cached(cached);
        }

        debug!(
            "Translating {}|{}: {}",
            source,
            target,
            text.chars().take(50).collect::<String>()
        );

        match self.inner.translate(text, source, target).await {
            Ok(translated) => {
                self.set_cached(key, &translated);
                Translation::Translated(translated)
            }
            Err(reason) => {
                match &reason {
                    TranslateError::NoTranslation | TranslateError::Malformed(_) => {
                        debug!("No usable translation, keeping original: {}", reason)
                    }
                    _ => warn!("Translation failed, keeping original: {}", reason),
                }
                Translation::Unchanged {
                    text: text.to_string(),
                    reason,
                }
            }
        }
    }

    /// Number of cached translations
    pub fn cache_len(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn get_cached(&self, key: &str) -> Option<String> {
        let guard = self.cache.lock().ok()?;
        guard.get(key).cloned()
    }

    fn set_cached(&self, key: String, translated: &str) {
        if let Ok(mut guard) = self.cache.lock() {
            guard.insert(key, translated.to_string());
        }
    }
}
