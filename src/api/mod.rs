//! Pantry API
//!
//! Endpoint table and response decoding for the external pantry API,
//! shared by every transport.
//!
//! # Endpoints
//!
//! - `GET /api/stats` - Aggregate counts
//! - `GET /api/expiring?days=N` - Ingredients expiring within N days
//! - `GET /api/ingredients` - Full collection
//! - `POST /api/ingredients` - Create an ingredient
//! - `PUT /api/ingredients/:id` - Update an ingredient
//! - `DELETE /api/ingredients/:id` - Delete an ingredient
//! - `GET /api/recipe-suggestions?days=N` - Recipes using expiring ingredients
//! - `POST /api/test-data` - Seed sample ingredients
//! - `DELETE /api/ingredients/reset-database?confirm=true` - Wipe the pantry

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::model::Ack;
#[cfg(feature = "client")]
use crate::model::{Ingredient, IngredientDraft, RecipeSuggestions, Stats};

#[cfg(feature = "client")]
mod client;

#[cfg(feature = "client")]
pub use client::{PantryClient, PantryClientConfig};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A pantry API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Stats,
    Expiring { days: u32 },
    Ingredients,
    CreateIngredient,
    UpdateIngredient(i64),
    DeleteIngredient(i64),
    RecipeSuggestions { days: u32 },
    SeedTestData,
    ResetDatabase,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Stats
            | Endpoint::Expiring { .. }
            | Endpoint::Ingredients
            | Endpoint::RecipeSuggestions { .. } => Method::Get,
            Endpoint::CreateIngredient | Endpoint::SeedTestData => Method::Post,
            Endpoint::UpdateIngredient(_) => Method::Put,
            Endpoint::DeleteIngredient(_) | Endpoint::ResetDatabase => Method::Delete,
        }
    }

    /// Path and query string, relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::Stats => "/api/stats".to_string(),
            Endpoint::Expiring { days } => format!("/api/expiring?days={}", days),
            Endpoint::Ingredients | Endpoint::CreateIngredient => "/api/ingredients".to_string(),
            Endpoint::UpdateIngredient(id) | Endpoint::DeleteIngredient(id) => {
                format!("/api/ingredients/{}", id)
            }
            Endpoint::RecipeSuggestions { days } => {
                format!("/api/recipe-suggestions?days={}", days)
            }
            Endpoint::SeedTestData => "/api/test-data".to_string(),
            Endpoint::ResetDatabase => {
                "/api/ingredients/reset-database?confirm=true".to_string()
            }
        }
    }

    /// Absolute URL against a base such as `http://localhost:5000`
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", normalize_base(base), self.path())
    }
}

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

/// Decode a response from its status and body text.
///
/// Non-success statuses become [`ClientError::Api`]; success bodies that
/// do not match `T` become [`ClientError::Decode`].
pub fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> ClientResult<T> {
    if !(200..300).contains(&status) {
        return Err(ClientError::from_response(status, text));
    }
    Ok(serde_json::from_str(text)?)
}

/// Decode a mutation acknowledgement. An empty success body is a valid ack.
pub fn decode_ack(status: u16, text: &str) -> ClientResult<Ack> {
    if (200..300).contains(&status) && text.trim().is_empty() {
        return Ok(Ack::default());
    }
    decode_response(status, text)
}

/// Operations offered by the pantry API.
///
/// Implemented by the HTTP client and by in-memory fakes in tests.
#[cfg(feature = "client")]
#[async_trait::async_trait]
pub trait PantryApi: Send + Sync {
    async fn stats(&self) -> ClientResult<Stats>;

    async fn expiring(&self, days: u32) -> ClientResult<Vec<Ingredient>>;

    async fn ingredients(&self) -> ClientResult<Vec<Ingredient>>;

    async fn create_ingredient(&self, draft: &IngredientDraft) -> ClientResult<Ack>;

    async fn update_ingredient(&self, id: i64, draft: &IngredientDraft) -> ClientResult<Ack>;

    async fn delete_ingredient(&self, id: i64) -> ClientResult<Ack>;

    async fn recipe_suggestions(&self, days: u32) -> ClientResult<RecipeSuggestions>;

    async fn seed_test_data(&self) -> ClientResult<Ack>;

    async fn reset_database(&self) -> ClientResult<Ack>;
}
