//! Recipes view state
//!
//! Recipe suggestions for ingredients expiring within a chosen horizon.
//! Every fetch is tagged with a [`RequestToken`]; only the response to the
//! most recent selection or refresh is applied.

use std::fmt;

use thiserror::Error;

use super::request::{RequestToken, RequestTracker};
use crate::error::{ClientError, ClientResult};
use crate::model::{Recipe, RecipeSuggestions};

/// Error text for a failed response without a server message
pub const FETCH_FAILED: &str = "Failed to fetch recipes";

/// Error text when no response arrived at all
pub const CONNECT_FAILED: &str = "Failed to connect to the server";

pub const EMPTY_PANTRY_TITLE: &str = "No ingredients expiring soon";
pub const EMPTY_PANTRY_HINT: &str =
    "Add some ingredients to your pantry to get personalized recipe suggestions!";

pub const NO_MATCHES_TITLE: &str = "No recipes found";
pub const NO_MATCHES_HINT: &str =
    "Try adding more common ingredients to get better recipe matches, or increase the expiry day filter.";

/// Number of ingredient tags shown per list on a recipe card
pub const CARD_TAG_LIMIT: usize = 3;

/// Expiry horizon offered by the filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Horizon {
    Three,
    #[default]
    Seven,
    Fourteen,
    Thirty,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [
        Horizon::Three,
        Horizon::Seven,
        Horizon::Fourteen,
        Horizon::Thirty,
    ];

    pub fn days(self) -> u32 {
        match self {
            Horizon::Three => 3,
            Horizon::Seven => 7,
            Horizon::Fourteen => 14,
            Horizon::Thirty => 30,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported horizon of {0} days (expected 3, 7, 14 or 30)")]
pub struct InvalidHorizon(pub u32);

impl TryFrom<u32> for Horizon {
    type Error = InvalidHorizon;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Horizon::ALL
            .into_iter()
            .find(|h| h.days() == days)
            .ok_or(InvalidHorizon(days))
    }
}

/// Fetch state of the suggestions
#[derive(Debug, Clone, PartialEq)]
pub enum RecipesState {
    Loading,
    Failed { message: String },
    Loaded(RecipeSuggestions),
}

/// What the page body should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipesContent<'a> {
    Loading,
    /// Inline error with a retry action
    Failed(&'a str),
    /// Nothing is expiring within the horizon
    EmptyPantry { message: Option<&'a str> },
    /// Ingredients are expiring but no recipe uses them
    NoMatches { message: Option<&'a str> },
    Grid {
        message: Option<&'a str>,
        recipes: &'a [Recipe],
    },
}

/// First few tags of a list plus the count left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> TagPreview<'a> {
    pub fn new(tags: &'a [String]) -> Self {
        let shown = &tags[..tags.len().min(CARD_TAG_LIMIT)];
        Self {
            shown,
            hidden: tags.len() - shown.len(),
        }
    }

    /// "+N more" when tags were left out
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

#[derive(Debug, Clone)]
pub struct RecipesView {
    horizon: Horizon,
    tracker: RequestTracker,
    state: RecipesState,
    expiring_ingredients: Vec<String>,
    selected: Option<i64>,
}

impl Default for RecipesView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipesView {
    pub fn new() -> Self {
        Self {
            horizon: Horizon::default(),
            tracker: RequestTracker::new(),
            state: RecipesState::Loading,
            expiring_ingredients: Vec::new(),
            selected: None,
        }
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    pub fn state(&self) -> &RecipesState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RecipesState::Loading)
    }

    /// Change the horizon and start a fetch for it
    pub fn select_horizon(&mut self, horizon: Horizon) -> RequestToken {
        self.horizon = horizon;
        self.refresh()
    }

    /// Start a fetch for the current horizon, superseding any in flight
    pub fn refresh(&mut self) -> RequestToken {
        self.state = RecipesState::Loading;
        self.tracker.begin()
    }

    /// Apply a response. Returns `false` if it belonged to a superseded
    /// request and was discarded.
    pub fn apply(&mut self, token: RequestToken, result: ClientResult<RecipeSuggestions>) -> bool {
        if !self.tracker.is_current(token) {
            tracing::debug!(?token, "Discarding stale recipe suggestions");
            return false;
        }

        match result {
            Ok(suggestions) => {
                self.expiring_ingredients = suggestions.expiring_ingredients.clone();
                self.state = RecipesState::Loaded(suggestions);
            }
            Err(e) => {
                tracing::warn!("Error fetching recipes: {}", e);
                let message = match &e {
                    ClientError::Api { body, .. } => {
                        self.expiring_ingredients = body.expiring_ingredients.clone();
                        e.alert_message(FETCH_FAILED)
                    }
                    ClientError::Decode(_) => {
                        self.expiring_ingredients.clear();
                        FETCH_FAILED.to_string()
                    }
                    ClientError::Network(_) => {
                        self.expiring_ingredients.clear();
                        CONNECT_FAILED.to_string()
                    }
                };
                self.state = RecipesState::Failed { message };
            }
        }
        true
    }

    /// Ingredient names from the latest applied response
    pub fn expiring_ingredients(&self) -> &[String] {
        &self.expiring_ingredients
    }

    pub fn content(&self) -> RecipesContent<'_> {
        match &self.state {
            RecipesState::Loading => RecipesContent::Loading,
            RecipesState::Failed { message } => RecipesContent::Failed(message),
            RecipesState::Loaded(suggestions) => {
                let message = suggestions.message.as_deref().filter(|m| !m.is_empty());
                if !suggestions.recipes.is_empty() {
                    RecipesContent::Grid {
                        message,
                        recipes: &suggestions.recipes,
                    }
                } else if self.expiring_ingredients.is_empty() {
                    RecipesContent::EmptyPantry { message }
                } else {
                    RecipesContent::NoMatches { message }
                }
            }
        }
    }

    // ============ Detail ============

    pub fn select_recipe(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn close_recipe(&mut self) {
        self.selected = None;
    }

    /// The recipe open in the detail view, if it is still loaded
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        let id = self.selected?;
        match &self.state {
            RecipesState::Loaded(suggestions) => suggestions.recipes.iter().find(|r| r.id == id),
            _ => None,
        }
    }
}
