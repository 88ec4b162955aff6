//! HTTP API Client
//!
//! Functions for communicating with the pantry REST API from the browser.
//! Endpoints and response decoding come from the shared `pantry` crate;
//! this module only moves bytes with gloo-net.

use gloo_net::http::{Request, RequestBuilder};
use pantry::api::{decode_ack, decode_response, normalize_base, Endpoint, Method, DEFAULT_API_BASE};
use pantry::view::Mutation;
use pantry::{Ack, ClientError, ClientResult, Ingredient, IngredientDraft, RecipeSuggestions, Stats};
use serde::de::DeserializeOwned;

/// Local storage key holding an API base URL override
pub const API_URL_KEY: &str = "pantry_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    resolve_api_base(stored)
}

fn resolve_api_base(stored: Option<String>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url).to_string()
}

/// Write a failure to the browser console
pub fn log_error(context: &str, error: &ClientError) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

fn builder(endpoint: Endpoint) -> RequestBuilder {
    let url = endpoint.url(&get_api_base());
    match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
}

/// Send a request and return the status with the raw body text
async fn send(endpoint: Endpoint, body: Option<&IngredientDraft>) -> ClientResult<(u16, String)> {
    let request = match body {
        Some(draft) => builder(endpoint).json(draft),
        None => builder(endpoint).build(),
    }
    .map_err(|e| ClientError::Network(format!("Request build error: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    Ok((status, text))
}

async fn fetch<T: DeserializeOwned>(endpoint: Endpoint) -> ClientResult<T> {
    let (status, text) = send(endpoint, None).await?;
    decode_response(status, &text)
}

async fn mutate(endpoint: Endpoint, body: Option<&IngredientDraft>) -> ClientResult<Ack> {
    let (status, text) = send(endpoint, body).await?;
    decode_ack(status, &text)
}

// ============ API Functions ============

pub async fn fetch_stats() -> ClientResult<Stats> {
    fetch(Endpoint::Stats).await
}

/// Fetch ingredients expiring within `days`
pub async fn fetch_expiring(days: u32) -> ClientResult<Vec<Ingredient>> {
    fetch(Endpoint::Expiring { days }).await
}

pub async fn fetch_ingredients() -> ClientResult<Vec<Ingredient>> {
    fetch(Endpoint::Ingredients).await
}

/// Perform an ingredient mutation
pub async fn send_mutation(mutation: &Mutation) -> ClientResult<Ack> {
    match mutation {
        Mutation::Create(draft) => mutate(Endpoint::CreateIngredient, Some(draft)).await,
        Mutation::Update { id, draft } => {
            mutate(Endpoint::UpdateIngredient(*id), Some(draft)).await
        }
        Mutation::Delete(id) => mutate(Endpoint::DeleteIngredient(*id), None).await,
    }
}

/// Fetch recipe suggestions for ingredients expiring within `days`
pub async fn fetch_recipe_suggestions(days: u32) -> ClientResult<RecipeSuggestions> {
    fetch(Endpoint::RecipeSuggestions { days }).await
}
