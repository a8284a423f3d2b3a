//! Wire types for the wiki API.
//!
//! Response shapes are tolerant: fields the server omits fall back to
//! defaults instead of failing deserialization, since the API is treated
//! as a black box returning JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The authenticated user as reported by the status endpoint.
///
/// The server returns an opaque claim map; the client validates nothing
/// beyond presence and reads the username claim for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub claims: serde_json::Map<String, Value>,
}

impl User {
    /// Username-like claim, if the server provided one.
    pub fn username(&self) -> Option<&str> {
        self.claims
            .get("cognito:username")
            .or_else(|| self.claims.get("username"))
            .and_then(Value::as_str)
    }
}

/// Response from `GET /api/auth/status`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// Response from `POST /api/auth/token`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExchangeResponse {
    #[serde(default)]
    pub message: String,
}

/// A wiki article, as held in the list and detail views.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Fields sent when creating or updating an article.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Response from `GET /api/wiki/articles`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// One entry in the storage browser listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub directory: bool,
}

/// Response from `GET /api/storage/upload?path=...`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StorageListResponse {
    #[serde(default)]
    pub items: Vec<StorageItem>,
}

/// Error body shape shared by failing API responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Caller-facing message, preferring `message` over `error`.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
