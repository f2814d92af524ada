//! EcoChef API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::RwLock;

use super::{Recipe, RecipeApi, SavedRecipe, SharedRecipe, User};
use crate::error::{ApiError, Error, Result};

/// Default EcoChef backend URL
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// All backend routes live under this prefix
const API_PREFIX: &str = "/api";

/// Backend request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// EcoChef backend client
pub struct EcoChefClient {
    http: HttpClient,
    base_url: String,
    auth_state: Arc<RwLock<AuthState>>,
}

/// Internal session state
#[derive(Debug, Clone, Default)]
struct AuthState {
    token: Option<String>,
}

impl EcoChefClient {
    /// Create a client against a custom backend URL
    pub fn with_host(
        token: Option<String>,
        api_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("ecochef/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = format!("{}{}", base.trim_end_matches('/'), API_PREFIX);

        Ok(Self {
            http,
            base_url,
            auth_state: Arc::new(RwLock::new(AuthState { token })),
        })
    }

    /// Replace the bearer token used for subsequent requests
    pub async fn set_token(&self, token: String) {
        let mut state = self.auth_state.write().await;
        state.token = Some(token);
    }

    /// Base URL including the `/api` prefix
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make an API request and decode the JSON response
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, &url);

        let token = self.auth_state.read().await.token.clone();
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        debug!("{} -> {}", path, status);

        match status {
            status if status.is_success() => {
                let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
                serde_json::from_str(payload).map_err(|e| {
                    Error::from(ApiError::InvalidResponse(format!(
                        "Failed to parse response: {}",
                        e
                    )))
                })
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                Err(ApiError::NotFound(backend_message(&text, "Resource not found")).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                Err(ApiError::RateLimit(backend_message(&text, "Too many requests")).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::BadRequest(backend_message(&text, "Bad request")).into())
            }
            status if status.is_server_error() => Err(ApiError::ServerError(backend_message(
                &text,
                format!("Server error: {}", status),
            ))
            .into()),
            _ => Err(ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into()),
        }
    }
}

/// Extract the backend's `{"error": ".."}` message, falling back to the raw body.
fn backend_message(body: &str, fallback: impl Into<String>) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(msg) = parsed.error.or(parsed.message)
        && !msg.trim().is_empty()
    {
        return msg;
    }

    if body.trim().is_empty() {
        fallback.into()
    } else {
        body.trim().to_string()
    }
}

#[async_trait]
impl RecipeApi for EcoChefClient {
    async fn search_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>> {
        self.request(
            Method::POST,
            "/recipes/buscar",
            Some(json!({ "ingredients": ingredients })),
        )
        .await
    }

    async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        let path = format!("/recipes/{}", recipe_id);
        self.request(Method::GET, &path, None).await
    }

    async fn save_recipe(&self, recipe: &Recipe) -> Result<serde_json::Value> {
        self.request(
            Method::POST,
            "/recipes/guardar",
            Some(json!({ "recipe": recipe })),
        )
        .await
    }

    async fn list_saved_recipes(&self, user_id: &str) -> Result<Vec<SavedRecipe>> {
        let path = format!("/recipes/usuario/{}", user_id);
        self.request(Method::GET, &path, None).await
    }

    async fn delete_recipe(&self, recipe_id: &str) -> Result<serde_json::Value> {
        self.request(
            Method::DELETE,
            "/recipes/eliminar",
            Some(json!({ "recipeId": recipe_id })),
        )
        .await
    }

    async fn list_shared_recipes(&self) -> Result<Vec<SharedRecipe>> {
        self.request(Method::GET, "/recipes/todas", None).await
    }

    async fn current_user(&self) -> Result<User> {
        self.request(Method::GET, "/auth/me", None).await
    }
}
