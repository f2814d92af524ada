//! Mock translation endpoint for testing

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::TranslationApi;
use crate::error::TranslateError;

/// Mock translation API.
///
/// Texts without a configured translation or failure answer
/// [`TranslateError::NoTranslation`].
#[derive(Default)]
pub struct MockTranslationApi {
    translations: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashMap<String, TranslateError>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

#[allow(dead_code)]
impl MockTranslationApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the translation returned for `text`.
    pub async fn with_translation(self, text: &str, translated: &str) -> Self {
        self.translations
            .lock()
            .await
            .insert(text.to_string(), translated.to_string());
        self
    }

    /// Configure a failure returned for `text` on every call.
    pub async fn with_failure(self, text: &str, error: TranslateError) -> Self {
        self.failures.lock().await.insert(text.to_string(), error);
        self
    }

    /// Delay every answer, to observe concurrent dispatch.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Number of calls that reached the mock
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// `(text, source, target)` of every call, in arrival order
    pub async fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl TranslationApi for MockTranslationApi {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> std::result::Result<String, TranslateError> {
        self.calls
            .lock()
            .await
            .push((text.to_string(), source.to_string(), target.to_string()));

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.failures.lock().await.get(text) {
            return Err(err.clone());
        }

        self.translations
            .lock()
            .await
            .get(text)
            .cloned()
            .ok_or(TranslateError::NoTranslation)
    }
}
