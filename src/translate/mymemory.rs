//! MyMemory translation endpoint client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use super::TranslationApi;
use crate::error::{ApiError, Result, TranslateError};

/// Public MyMemory endpoint (free, no authentication)
pub const DEFAULT_TRANSLATION_URL: &str = "https://api.mymemory.translated.net/get";

/// Upper bound on a single translation call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a MyMemory-compatible `GET ?q=..&langpair=src|dst` endpoint
pub struct MyMemoryClient {
    http: HttpClient,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    /// Sent as a number or as a numeric string depending on the error path
    #[serde(default)]
    response_status: Option<serde_json::Value>,
    #[serde(default)]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    #[serde(default)]
    translated_text: Option<String>,
}

impl MyMemoryResponse {
    fn status_code(&self) -> Option<u64> {
        match self.response_status.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn into_translation(self) -> std::result::Result<String, TranslateError> {
        if self.status_code() != Some(200) {
            return Err(TranslateError::NoTranslation);
        }
        self.response_data
            .and_then(|d| d.translated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(TranslateError::NoTranslation)
    }
}

impl MyMemoryClient {
    /// Create a client for `url` with the given per-call timeout
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("ecochef/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: url.unwrap_or_else(|| DEFAULT_TRANSLATION_URL.to_string()),
        })
    }
}

#[async_trait]
impl TranslationApi for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> std::result::Result<String, TranslateError> {
        let langpair = format!("{}|{}", source, target);

        let response = self
            .http
            .get(&self.url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::HttpStatus(status.as_u16()));
        }

        // The timeout still applies while the body streams in
        let raw = response.text().await?;
        let body: MyMemoryResponse = serde_json::from_str(&raw)
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        body.into_translation()
    }
}
