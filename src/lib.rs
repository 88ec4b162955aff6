//! # Pantry
//!
//! Pantry Tracker - a client for a household pantry API that tracks
//! ingredient expiry dates and suggests recipes for what is about to spoil.
//!
//! ## Features
//!
//! - **Expiry classification**: every ingredient is bucketed as expired,
//!   expiring soon, expiring this week or fresh, recomputed client-side
//! - **Ingredient CRUD**: form and delete-confirmation state machines
//! - **Recipe suggestions**: match scoring and a horizon filter where the
//!   latest selection always wins
//! - **Two front ends**: a native CLI and a Leptos browser UI sharing the
//!   same view state
//!
//! ## Modules
//!
//! - [`model`]: JSON data model of the pantry API
//! - [`expiry`]: expiry status classification and day-count text
//! - [`matching`]: recipe match scoring
//! - [`api`]: endpoint table, response decoding and the HTTP client
//! - [`view`]: framework-independent view state machines
//! - [`render`]: plain-text rendering for the terminal
//!
//! The `client` feature (on by default) adds the reqwest client,
//! [`session`], [`config`] and [`logging`]. The browser UI builds without it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pantry::api::{PantryClient, PantryClientConfig};
//! use pantry::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PantryClient::new(PantryClientConfig::default())?;
//!     let session = Session::new(client);
//!
//!     let dashboard = session.load_dashboard().await;
//!     let today = chrono::Local::now().date_naive();
//!     println!("{}", pantry::render::dashboard(&dashboard, today));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod expiry;
pub mod matching;
pub mod model;
pub mod render;
pub mod view;

#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod logging;
#[cfg(feature = "client")]
pub mod session;

// Re-export top-level types for convenience
pub use error::{ClientError, ClientResult, ErrorBody};

pub use expiry::ExpiryStatus;

pub use matching::{MatchQuality, MatchScore};

pub use model::{
    Ack, DraftError, Ingredient, IngredientDraft, Instruction, Recipe, RecipeSuggestions, Stats,
};

pub use api::{Endpoint, DEFAULT_API_BASE};

#[cfg(feature = "client")]
pub use api::{PantryApi, PantryClient, PantryClientConfig};

pub use view::{
    DashboardView, FormMode, Horizon, IngredientRow, IngredientsView, Mutation, MutationOutcome,
    Page, RecipesContent, RecipesView,
};

#[cfg(feature = "client")]
pub use config::{Config, ConfigError};

#[cfg(feature = "client")]
pub use session::Session;
