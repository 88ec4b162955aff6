//! Ingredients view state
//!
//! CRUD state machine over the ingredient collection:
//!
//! - list -> (add | edit) -> submit -> list
//! - list -> delete-confirm -> list
//!
//! Submitting and confirming only produce a [`Mutation`]. The caller
//! performs it and hands the response back through
//! [`IngredientsView::complete`], which decides between re-fetching the
//! list and alerting the user.

use chrono::NaiveDate;

use super::IngredientRow;
use crate::error::{ClientError, ClientResult};
use crate::model::{Ack, DraftError, Ingredient, IngredientDraft};

/// Alert text when saving fails without a server message
pub const SAVE_FAILED: &str = "Error saving ingredient";

/// Alert text when deleting fails without a server message
pub const DELETE_FAILED: &str = "Error deleting ingredient";

/// Shown when the collection is empty
pub const NO_INGREDIENTS: &str =
    "No ingredients added yet. Add your first ingredient to get started!";

/// Question asked before deleting
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this ingredient?";

/// Whether the ingredient form is open, and for what
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(i64),
}

/// A write the caller must perform against the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(IngredientDraft),
    Update { id: i64, draft: IngredientDraft },
    Delete(i64),
}

impl Mutation {
    /// Alert text used when the server gives no message
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            Mutation::Create(_) | Mutation::Update { .. } => SAVE_FAILED,
            Mutation::Delete(_) => DELETE_FAILED,
        }
    }
}

/// What the caller should do after a mutation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The write succeeded; fetch the list again
    Refetch,
    /// The write failed; show this text in a blocking alert
    Alert(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientsView {
    ingredients: Vec<Ingredient>,
    loading: bool,
    form: FormMode,
    draft: IngredientDraft,
    pending_delete: Option<i64>,
}

impl Default for IngredientsView {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientsView {
    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            loading: true,
            form: FormMode::Closed,
            draft: IngredientDraft::default(),
            pending_delete: None,
        }
    }

    // ============ List ============

    /// Apply a list response. Failures are logged and keep the last list.
    pub fn apply_list(&mut self, result: ClientResult<Vec<Ingredient>>) {
        match result {
            Ok(items) => self.ingredients = items,
            Err(e) => tracing::warn!("Failed to fetch ingredients: {}", e),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn get(&self, id: i64) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn rows(&self, today: NaiveDate) -> Vec<IngredientRow> {
        self.ingredients
            .iter()
            .map(|ingredient| IngredientRow::new(ingredient, today))
            .collect()
    }

    // ============ Form ============

    pub fn form(&self) -> FormMode {
        self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form != FormMode::Closed
    }

    pub fn draft(&self) -> &IngredientDraft {
        &self.draft
    }

    /// Edit buffer of the open form
    pub fn draft_mut(&mut self) -> &mut IngredientDraft {
        &mut self.draft
    }

    /// Open an empty form for a new ingredient
    pub fn open_add(&mut self) {
        self.form = FormMode::Adding;
        self.draft = IngredientDraft::default();
    }

    /// Open the form pre-filled from a listed ingredient.
    /// Returns `false` if the id is not in the loaded list.
    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.get(id).map(IngredientDraft::from_ingredient) {
            Some(draft) => {
                self.begin_edit(id, draft);
                true
            }
            None => false,
        }
    }

    /// Open the form for `id` with an explicit draft
    pub fn begin_edit(&mut self, id: i64, draft: IngredientDraft) {
        self.form = FormMode::Editing(id);
        self.draft = draft;
    }

    /// Close the form and discard the draft
    pub fn cancel_form(&mut self) {
        self.form = FormMode::Closed;
        self.draft = IngredientDraft::default();
    }

    /// Turn the open form into a mutation after checking required fields.
    /// The form stays open until the mutation completes.
    pub fn submit(&self) -> Result<Mutation, DraftError> {
        self.draft.validate()?;
        match self.form {
            FormMode::Closed => Err(DraftError::FormClosed),
            FormMode::Adding => Ok(Mutation::Create(self.draft.clone())),
            FormMode::Editing(id) => Ok(Mutation::Update {
                id,
                draft: self.draft.clone(),
            }),
        }
    }

    // ============ Delete ============

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Abandon the pending delete; nothing is sent
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, producing the mutation to perform
    pub fn confirm_delete(&mut self) -> Option<Mutation> {
        self.pending_delete.take().map(Mutation::Delete)
    }

    // ============ Completion ============

    /// Handle the response to a mutation produced by this view
    pub fn complete(&mut self, mutation: &Mutation, result: ClientResult<Ack>) -> MutationOutcome {
        match result {
            Ok(_) => {
                if !matches!(mutation, Mutation::Delete(_)) {
                    self.cancel_form();
                }
                MutationOutcome::Refetch
            }
            Err(e) => {
                log_failure(mutation, &e);
                MutationOutcome::Alert(e.alert_message(mutation.failure_fallback()))
            }
        }
    }
}

fn log_failure(mutation: &Mutation, error: &ClientError) {
    match mutation {
        Mutation::Create(_) => tracing::error!("Error saving ingredient: {}", error),
        Mutation::Update { id, .. } => tracing::error!(id, "Error saving ingredient: {}", error),
        Mutation::Delete(id) => tracing::error!(id, "Error deleting ingredient: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::{ingredient, today};

    fn loaded() -> IngredientsView {
        let mut view = IngredientsView::new();
        view.apply_list(Ok(vec![ingredient(1, "Milk", 2), ingredient(2, "Bread", 9)]));
        view
    }

    #[test]
    fn test_add_flow() {
        let mut view = loaded();
        view.open_add();
        assert_eq!(view.form(), FormMode::Adding);

        view.draft_mut().name = "Eggs".to_string();
        view.draft_mut().expiry_date = "2025-09-01".to_string();

        let mutation = view.submit().unwrap();
        assert!(matches!(&mutation, Mutation::Create(d) if d.name == "Eggs"));
        assert!(view.is_form_open());

        let ack = Ack {
            message: Some("Ingredient added successfully".to_string()),
            id: Some(3),
            deleted_count: None,
        };
        assert_eq!(view.complete(&mutation, Ok(ack)), MutationOutcome::Refetch);
        assert_eq!(view.form(), FormMode::Closed);
        assert_eq!(*view.draft(), IngredientDraft::default());
    }

    #[test]
    fn test_submit_requires_name_and_date() {
        let mut view = loaded();
        view.open_add();
        assert_eq!(view.submit(), Err(DraftError::MissingName));

        view.draft_mut().name = "Eggs".to_string();
        assert_eq!(view.submit(), Err(DraftError::MissingExpiryDate));
    }

    #[test]
    fn test_submit_with_closed_form() {
        let mut view = loaded();
        view.draft_mut().name = "Eggs".to_string();
        view.draft_mut().expiry_date = "2025-09-01".to_string();
        assert_eq!(view.submit(), Err(DraftError::FormClosed));
    }

    #[test]
    fn test_edit_prefills_from_list() {
        let mut view = loaded();
        assert!(view.open_edit(1));
        assert_eq!(view.form(), FormMode::Editing(1));
        assert_eq!(view.draft().name, "Milk");
        assert_eq!(view.draft().quantity, "1 pack");

        view.draft_mut().quantity = "2 packs".to_string();
        let mutation = view.submit().unwrap();
        assert!(matches!(
            &mutation,
            Mutation::Update { id: 1, draft } if draft.quantity == "2 packs"
        ));
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut view = loaded();
        assert!(!view.open_edit(42));
        assert_eq!(view.form(), FormMode::Closed);
    }

    #[test]
    fn test_failed_save_alerts_and_keeps_form() {
        let mut view = loaded();
        view.begin_edit(
            99,
            IngredientDraft {
                name: "Ghost".to_string(),
                expiry_date: "2025-09-01".to_string(),
                ..Default::default()
            },
        );
        let mutation = view.submit().unwrap();

        let outcome = view.complete(
            &mutation,
            Err(ClientError::from_response(404, r#"{"error": "Ingredient not found"}"#)),
        );
        assert_eq!(outcome, MutationOutcome::Alert("Ingredient not found".to_string()));
        assert_eq!(view.form(), FormMode::Editing(99));
        assert_eq!(view.draft().name, "Ghost");
    }

    #[test]
    fn test_network_failure_uses_generic_alert() {
        let mut view = loaded();
        view.open_add();
        view.draft_mut().name = "Eggs".to_string();
        view.draft_mut().expiry_date = "2025-09-01".to_string();
        let mutation = view.submit().unwrap();

        let outcome = view.complete(&mutation, Err(ClientError::Network("refused".to_string())));
        assert_eq!(outcome, MutationOutcome::Alert(SAVE_FAILED.to_string()));
    }

    #[test]
    fn test_cancel_delete_sends_nothing() {
        let mut view = loaded();
        view.request_delete(1);
        assert_eq!(view.pending_delete(), Some(1));

        view.cancel_delete();
        assert_eq!(view.confirm_delete(), None);
        assert_eq!(view.ingredients().len(), 2);
    }

    #[test]
    fn test_confirm_delete() {
        let mut view = loaded();
        view.request_delete(2);
        let mutation = view.confirm_delete().unwrap();
        assert_eq!(mutation, Mutation::Delete(2));
        assert_eq!(view.pending_delete(), None);

        let outcome = view.complete(&mutation, Err(ClientError::from_response(500, "oops")));
        assert_eq!(outcome, MutationOutcome::Alert(DELETE_FAILED.to_string()));
    }

    #[test]
    fn test_list_failure_keeps_previous_items() {
        let mut view = loaded();
        view.apply_list(Err(ClientError::Network("refused".to_string())));
        assert_eq!(view.ingredients().len(), 2);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_rows_derive_status_from_day_count() {
        let view = loaded();
        let rows = view.rows(today());
        assert_eq!(rows[0].css_class(), "expiring-soon");
        assert_eq!(rows[1].css_class(), "fresh");
        assert_eq!(rows[1].days_text, "9 days left");
    }
}
