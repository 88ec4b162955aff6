//! View State
//!
//! Framework-independent state machines behind each screen. The browser
//! UI keeps them in reactive signals; the CLI drives them directly.
//!
//! - [`shell`]: page selection
//! - [`dashboard`]: stats plus the ingredients expiring this week
//! - [`ingredients`]: CRUD over the ingredient collection
//! - [`recipes`]: recipe suggestions with a horizon filter

pub mod dashboard;
pub mod ingredients;
pub mod recipes;
pub mod request;
pub mod shell;

pub use dashboard::{DashboardView, EXPIRING_HORIZON_DAYS};
pub use ingredients::{FormMode, IngredientsView, Mutation, MutationOutcome};
pub use recipes::{Horizon, RecipesContent, RecipesState, RecipesView, TagPreview};
pub use request::{RequestToken, RequestTracker};
pub use shell::Page;

use chrono::NaiveDate;
use serde::Serialize;

use crate::expiry::{self, ExpiryStatus};
use crate::model::Ingredient;

/// Display projection of one ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRow {
    pub id: i64,
    pub name: String,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub expiry_date: String,
    /// `None` when no day count could be determined
    pub status: Option<ExpiryStatus>,
    pub days_text: String,
}

impl IngredientRow {
    pub fn new(ingredient: &Ingredient, today: NaiveDate) -> Self {
        let days = ingredient.days_left(today);
        let status = days.map(expiry::classify);
        let days_text = match (days, status) {
            (Some(days), Some(status)) => expiry::format_days_left(days, status),
            _ => "Expiry unknown".to_string(),
        };

        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.clone().filter(|q| !q.is_empty()),
            category: ingredient.category.clone().filter(|c| !c.is_empty()),
            expiry_date: ingredient.expiry_date.clone(),
            status,
            days_text,
        }
    }

    /// CSS class for the row; "unknown" when the status is undetermined
    pub fn css_class(&self) -> &'static str {
        self.status.map(ExpiryStatus::css_class).unwrap_or("unknown")
    }

    /// "quantity • category" detail line
    pub fn details(&self) -> String {
        format!(
            "{} • {}",
            self.quantity.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or("")
        )
    }

    pub fn quantity_or_unspecified(&self) -> &str {
        self.quantity.as_deref().unwrap_or("Not specified")
    }

    pub fn category_or_unspecified(&self) -> &str {
        self.category.as_deref().unwrap_or("Not specified")
    }
}
