//! User models

use serde::{Deserialize, Serialize};

/// Account behind the current session token (`/auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
