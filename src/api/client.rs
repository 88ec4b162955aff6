//! Pantry REST API Client
//!
//! Native HTTP client for the pantry API, built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{decode_ack, decode_response, Endpoint, Method, PantryApi, DEFAULT_API_BASE};
use crate::error::{ClientError, ClientResult};
use crate::model::{Ack, Ingredient, IngredientDraft, RecipeSuggestions, Stats};

/// Pantry REST API client
pub struct PantryClient {
    client: Client,
    config: PantryClientConfig,
}

/// Configuration for the pantry client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryClientConfig {
    /// Base URL of the pantry API (e.g., "http://localhost:5000")
    pub base_url: String,
    /// Request timeout in seconds; 0 disables the timeout
    pub request_timeout_secs: u64,
}

impl Default for PantryClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl PantryClient {
    /// Create a new client with the given configuration
    pub fn new(config: PantryClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &PantryClientConfig {
        &self.config
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.config.base_url);
        match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        }
    }

    /// Send a request and return the status with the raw body text
    async fn send(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> ClientResult<(u16, String)> {
        tracing::debug!(method = ?endpoint.method(), path = %endpoint.path(), "Sending request");

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            tracing::debug!(status, path = %endpoint.path(), "Request failed");
        }
        Ok((status, text))
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ClientResult<T> {
        let (status, text) = self.send(endpoint, self.request(endpoint)).await?;
        decode_response(status, &text)
    }

    async fn mutate(
        &self,
        endpoint: Endpoint,
        draft: Option<&IngredientDraft>,
    ) -> ClientResult<Ack> {
        let mut request = self.request(endpoint);
        if let Some(draft) = draft {
            request = request.json(draft);
        }
        let (status, text) = self.send(endpoint, request).await?;
        decode_ack(status, &text)
    }
}

#[async_trait]
impl PantryApi for PantryClient {
    async fn stats(&self) -> ClientResult<Stats> {
        self.fetch(Endpoint::Stats).await
    }

    async fn expiring(&self, days: u32) -> ClientResult<Vec<Ingredient>> {
        self.fetch(Endpoint::Expiring { days }).await
    }

    async fn ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        self.fetch(Endpoint::Ingredients).await
    }

    async fn create_ingredient(&self, draft: &IngredientDraft) -> ClientResult<Ack> {
        self.mutate(Endpoint::CreateIngredient, Some(draft)).await
    }

    async fn update_ingredient(&self, id: i64, draft: &IngredientDraft) -> ClientResult<Ack> {
        self.mutate(Endpoint::UpdateIngredient(id), Some(draft)).await
    }

    async fn delete_ingredient(&self, id: i64) -> ClientResult<Ack> {
        self.mutate(Endpoint::DeleteIngredient(id), None).await
    }

    async fn recipe_suggestions(&self, days: u32) -> ClientResult<RecipeSuggestions> {
        self.fetch(Endpoint::RecipeSuggestions { days }).await
    }

    async fn seed_test_data(&self) -> ClientResult<Ack> {
        self.mutate(Endpoint::SeedTestData, None).await
    }

    async fn reset_database(&self) -> ClientResult<Ack> {
        self.mutate(Endpoint::ResetDatabase, None).await
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if err.is_timeout() {
            ClientError::Network(format!("request timed out: {}", err))
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, put},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Pantry = Arc<Mutex<Vec<Ingredient>>>;

    async fn list(State(pantry): State<Pantry>) -> Json<Vec<Ingredient>> {
        Json(pantry.lock().unwrap().clone())
    }

    async fn create(State(pantry): State<Pantry>, Json(draft): Json<IngredientDraft>) -> Response {
        let mut items = pantry.lock().unwrap();
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        items.push(Ingredient {
            id,
            name: draft.name,
            expiry_date: draft.expiry_date,
            quantity: Some(draft.quantity),
            category: Some(draft.category),
            days_until_expiry: Some(5),
            date_added: None,
        });
        (
            StatusCode::CREATED,
            Json(json!({"message": "Ingredient added successfully", "id": id})),
        )
            .into_response()
    }

    async fn update(
        State(pantry): State<Pantry>,
        Path(id): Path<i64>,
        Json(draft): Json<IngredientDraft>,
    ) -> Response {
        let mut items = pantry.lock().unwrap();
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = draft.name;
                item.expiry_date = draft.expiry_date;
                Json(json!({"message": "Ingredient updated successfully"})).into_response()
            }
            None => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Ingredient not found"})),
            )
                .into_response(),
        }
    }

    async fn delete(State(pantry): State<Pantry>, Path(id): Path<i64>) -> Json<serde_json::Value> {
        pantry.lock().unwrap().retain(|i| i.id != id);
        Json(json!({"message": "Ingredient deleted successfully"}))
    }

    async fn failing_suggestions() -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "API request failed",
                "expiringIngredients": ["milk", "spinach"],
                "recipes": []
            })),
        )
            .into_response()
    }

    async fn html_error() -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html><body>Internal Server Error</body></html>",
        )
            .into_response()
    }

    /// Start a fake pantry API on an ephemeral port
    async fn spawn_fake_api() -> PantryClient {
        let pantry: Pantry = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/api/ingredients", get(list).post(create))
            .route("/api/ingredients/:id", put(update).delete(delete))
            .route("/api/recipe-suggestions", get(failing_suggestions))
            .route("/api/stats", get(html_error))
            .with_state(pantry);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        PantryClient::new(PantryClientConfig {
            base_url: format!("http://{}", addr),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    fn draft(name: &str) -> IngredientDraft {
        IngredientDraft {
            name: name.to_string(),
            expiry_date: "2025-09-01".to_string(),
            quantity: "1 dozen".to_string(),
            category: "Dairy".to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = PantryClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let client = spawn_fake_api().await;

        let ack = client.create_ingredient(&draft("Eggs")).await.unwrap();
        assert_eq!(ack.id, Some(1));

        let items = client.ingredients().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Eggs");
        assert_eq!(items[0].quantity.as_deref(), Some("1 dozen"));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let client = spawn_fake_api().await;
        client.create_ingredient(&draft("Eggs")).await.unwrap();
        client.create_ingredient(&draft("Milk")).await.unwrap();

        client.delete_ingredient(1).await.unwrap();

        let names: Vec<_> = client
            .ingredients()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Milk".to_string()]);
    }

    #[tokio::test]
    async fn test_update_missing_id_surfaces_server_error() {
        let client = spawn_fake_api().await;

        let err = client.update_ingredient(42, &draft("Ghost")).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(err.alert_message("Error saving ingredient"), "Ingredient not found");
    }

    #[tokio::test]
    async fn test_recipe_error_keeps_expiring_ingredients() {
        let client = spawn_fake_api().await;

        match client.recipe_suggestions(7).await.unwrap_err() {
            ClientError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.error.as_deref(), Some("API request failed"));
                assert_eq!(body.expiring_ingredients, vec!["milk", "spinach"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_html_error_body_has_no_message() {
        let client = spawn_fake_api().await;

        let err = client.stats().await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PantryClient::new(PantryClientConfig {
            base_url: format!("http://{}", addr),
            request_timeout_secs: 5,
        })
        .unwrap();

        let err = client.ingredients().await.unwrap_err();
        assert!(err.is_network(), "expected network error, got {err:?}");
    }
}
