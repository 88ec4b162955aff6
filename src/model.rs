//! Pantry Data Model
//!
//! Client-side projections of the pantry API's JSON responses.
//! Nothing here is persisted; every value lives until the next fetch.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::expiry::{self, ExpiryStatus};

/// A tracked pantry ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Calendar date string, `YYYY-MM-DD`
    pub expiry_date: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Server-computed day count; null when the server could not parse the date
    #[serde(default)]
    pub days_until_expiry: Option<i64>,
    #[serde(default)]
    pub date_added: Option<String>,
}

impl Ingredient {
    /// Days until expiry, preferring the server count and falling back to
    /// the stored expiry date relative to `today`.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.days_until_expiry.or_else(|| {
            expiry::parse_expiry_date(&self.expiry_date).map(|date| expiry::days_until(date, today))
        })
    }

    /// Expiry status, always recomputed from the day count
    pub fn status(&self, today: NaiveDate) -> Option<ExpiryStatus> {
        self.days_left(today).map(expiry::classify)
    }
}

/// Pre-aggregated pantry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_ingredients: u32,
    #[serde(default)]
    pub expired: u32,
    #[serde(default)]
    pub expiring_soon: u32,
    #[serde(default)]
    pub fresh: u32,
}

/// Form buffer for creating or updating an ingredient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDraft {
    pub name: String,
    pub expiry_date: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub category: String,
}

impl IngredientDraft {
    /// Pre-fill a draft from an existing ingredient
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            expiry_date: ingredient.expiry_date.clone(),
            quantity: ingredient.quantity.clone().unwrap_or_default(),
            category: ingredient.category.clone().unwrap_or_default(),
        }
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.expiry_date.trim().is_empty() {
            return Err(DraftError::MissingExpiryDate);
        }
        Ok(())
    }
}

/// Reasons a form submission is refused before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Expiry date is required")]
    MissingExpiryDate,

    #[error("No ingredient form is open")]
    FormClosed,
}

/// Acknowledgement body returned by mutations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
}

/// A single recipe instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(default)]
    pub number: u32,
    pub step: String,
}

/// A recipe suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub image: Option<String>,
    /// `None` when the server reports "Unknown"
    #[serde(default, deserialize_with = "lenient_count")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<String>,
    #[serde(default)]
    pub missed_ingredients: Vec<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Recipe {
    /// Match quality derived from the used/missed counts
    pub fn match_score(&self) -> crate::matching::MatchScore {
        crate::matching::score(self.used_ingredient_count, self.missed_ingredient_count)
    }
}

/// Response of the recipe-suggestions endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestions {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub expiring_ingredients: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub recipe_count: Option<usize>,
}

/// Accept a count as a number or numeric string; anything else is unknown
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_ingredient_from_server_json() {
        let json = r#"{
            "id": 4,
            "name": "Chicken",
            "expiryDate": "2025-08-14",
            "quantity": "2 lbs",
            "category": null,
            "dateAdded": "2025-08-10 12:00:00",
            "daysUntilExpiry": -2,
            "status": "expired"
        }"#;

        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.name, "Chicken");
        assert_eq!(ingredient.quantity.as_deref(), Some("2 lbs"));
        assert_eq!(ingredient.category, None);
        assert_eq!(ingredient.days_until_expiry, Some(-2));
    }

    #[test]
    fn test_status_ignores_server_label() {
        // The dashboard feed carries no status; the list feed uses camelCase labels.
        let json = r#"{"id": 1, "name": "Milk", "expiryDate": "2025-08-15",
                       "daysUntilExpiry": 5, "status": "fresh"}"#;
        let ingredient: Ingredient = serde_json::from_str(json).unwrap();

        assert_eq!(
            ingredient.status(day("2025-08-10")),
            Some(ExpiryStatus::ExpiringWeek)
        );
    }

    #[test]
    fn test_days_left_falls_back_to_expiry_date() {
        let ingredient = Ingredient {
            id: 1,
            name: "Bread".to_string(),
            expiry_date: "2025-08-16".to_string(),
            quantity: None,
            category: None,
            days_until_expiry: None,
            date_added: None,
        };

        assert_eq!(ingredient.days_left(day("2025-08-14")), Some(2));
        assert_eq!(
            ingredient.status(day("2025-08-14")),
            Some(ExpiryStatus::ExpiringSoon)
        );
    }

    #[test]
    fn test_days_left_unknown_for_garbage_date() {
        let ingredient = Ingredient {
            id: 1,
            name: "Mystery".to_string(),
            expiry_date: "someday".to_string(),
            quantity: None,
            category: None,
            days_until_expiry: None,
            date_added: None,
        };

        assert_eq!(ingredient.days_left(day("2025-08-14")), None);
        assert_eq!(ingredient.status(day("2025-08-14")), None);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = IngredientDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        draft.name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingName));

        draft.name = "Eggs".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingExpiryDate));

        draft.expiry_date = "2025-09-01".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_draft_serializes_camel_case_with_empty_optionals() {
        let draft = IngredientDraft {
            name: "Eggs".to_string(),
            expiry_date: "2025-09-01".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["name"], "Eggs");
        assert_eq!(value["expiryDate"], "2025-09-01");
        assert_eq!(value["quantity"], "");
        assert_eq!(value["category"], "");
    }

    #[test]
    fn test_recipe_lenient_fields() {
        let json = r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "",
            "readyInMinutes": "Unknown",
            "servings": 2,
            "sourceUrl": "",
            "summary": "A quick dinner.",
            "usedIngredients": ["garlic"],
            "missedIngredients": ["pasta", "parmesan"],
            "usedIngredientCount": 1,
            "missedIngredientCount": 2,
            "instructions": [{"number": 1, "step": "Boil water."}],
            "source": "Spoonacular"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.source_url, None);
        assert_eq!(recipe.ready_in_minutes, None);
        assert_eq!(recipe.servings, Some(2));
        assert_eq!(recipe.summary.as_deref(), Some("A quick dinner."));
        assert_eq!(recipe.instructions[0].step, "Boil water.");
        assert_eq!(recipe.match_score().percentage(), Some(33));
    }

    #[test]
    fn test_suggestions_defaults() {
        let suggestions: RecipeSuggestions =
            serde_json::from_str(r#"{"message": "No ingredients expiring soon"}"#).unwrap();
        assert!(suggestions.recipes.is_empty());
        assert!(suggestions.expiring_ingredients.is_empty());
        assert_eq!(
            suggestions.message.as_deref(),
            Some("No ingredients expiring soon")
        );
    }
}
