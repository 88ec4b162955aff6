//! API Session
//!
//! Drives the view state machines against a [`PantryApi`]: issues the
//! requests each view needs and feeds the responses back in.

use tokio::sync::Mutex;

use crate::api::PantryApi;
use crate::error::ClientResult;
use crate::model::Ack;
use crate::view::{
    DashboardView, Horizon, IngredientsView, Mutation, MutationOutcome, RecipesView,
    EXPIRING_HORIZON_DAYS,
};

/// A pantry API together with the view-driving operations
pub struct Session<A> {
    api: A,
}

impl<A: PantryApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the dashboard. Stats and the expiring list are fetched concurrently.
    pub async fn load_dashboard(&self) -> DashboardView {
        let (stats, expiring) = tokio::join!(
            self.api.stats(),
            self.api.expiring(EXPIRING_HORIZON_DAYS)
        );

        let mut view = DashboardView::new();
        view.apply_stats(stats);
        view.apply_expiring(expiring);
        view
    }

    pub async fn refresh_ingredients(&self, view: &mut IngredientsView) {
        view.apply_list(self.api.ingredients().await);
    }

    /// Perform a mutation and complete it on the view.
    ///
    /// On success the list is re-fetched after the response is observed.
    /// Returns the alert text on failure.
    pub async fn run_mutation(
        &self,
        view: &mut IngredientsView,
        mutation: Mutation,
    ) -> Option<String> {
        let result = match &mutation {
            Mutation::Create(draft) => self.api.create_ingredient(draft).await,
            Mutation::Update { id, draft } => self.api.update_ingredient(*id, draft).await,
            Mutation::Delete(id) => self.api.delete_ingredient(*id).await,
        };

        match view.complete(&mutation, result) {
            MutationOutcome::Refetch => {
                self.refresh_ingredients(view).await;
                None
            }
            MutationOutcome::Alert(message) => Some(message),
        }
    }

    /// Select a horizon and fetch its suggestions.
    ///
    /// The view is locked only to issue the request token and to apply the
    /// response, so selections may overlap. Returns whether the response
    /// was applied.
    pub async fn select_horizon(&self, view: &Mutex<RecipesView>, horizon: Horizon) -> bool {
        let token = view.lock().await.select_horizon(horizon);
        let result = self.api.recipe_suggestions(horizon.days()).await;
        view.lock().await.apply(token, result)
    }

    /// Re-fetch suggestions for the current horizon
    pub async fn refresh_recipes(&self, view: &Mutex<RecipesView>) -> bool {
        let (token, days) = {
            let mut view = view.lock().await;
            (view.refresh(), view.horizon().days())
        };
        let result = self.api.recipe_suggestions(days).await;
        view.lock().await.apply(token, result)
    }

    /// Load the server's sample ingredients
    pub async fn seed(&self) -> ClientResult<Ack> {
        let ack = self.api.seed_test_data().await?;
        tracing::info!("Seeded sample ingredients");
        Ok(ack)
    }

    /// Delete every ingredient on the server
    pub async fn reset(&self) -> ClientResult<Ack> {
        let ack = self.api.reset_database().await?;
        tracing::info!(deleted = ?ack.deleted_count, "Reset pantry database");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::model::{Ingredient, IngredientDraft, Recipe, RecipeSuggestions, Stats};
    use crate::view::RecipesContent;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    /// In-memory pantry. Recipe requests for short horizons answer slowly.
    #[derive(Default)]
    struct FakeApi {
        items: StdMutex<Vec<Ingredient>>,
        fail_stats: bool,
    }

    fn sample_items(names: &[&str]) -> Vec<Ingredient> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Ingredient {
                id: i as i64 + 1,
                name: name.to_string(),
                expiry_date: "2025-08-20".to_string(),
                quantity: None,
                category: None,
                days_until_expiry: Some(i as i64 * 4),
                date_added: None,
            })
            .collect()
    }

    impl FakeApi {
        fn with_items(names: &[&str]) -> Self {
            Self {
                items: StdMutex::new(sample_items(names)),
                fail_stats: false,
            }
        }

        fn names(&self) -> Vec<String> {
            self.items.lock().unwrap().iter().map(|i| i.name.clone()).collect()
        }
    }

    fn not_found() -> ClientError {
        ClientError::from_response(404, r#"{"error": "Ingredient not found"}"#)
    }

    #[async_trait]
    impl PantryApi for FakeApi {
        async fn stats(&self) -> ClientResult<Stats> {
            if self.fail_stats {
                return Err(ClientError::Network("refused".to_string()));
            }
            let total = self.items.lock().unwrap().len() as u32;
            Ok(Stats {
                total_ingredients: total,
                fresh: total,
                ..Default::default()
            })
        }

        async fn expiring(&self, days: u32) -> ClientResult<Vec<Ingredient>> {
            let items = self.items.lock().unwrap();
            Ok(items
                .iter()
                .filter(|i| i.days_until_expiry.is_some_and(|d| d <= days as i64))
                .cloned()
                .collect())
        }

        async fn ingredients(&self) -> ClientResult<Vec<Ingredient>> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create_ingredient(&self, draft: &IngredientDraft) -> ClientResult<Ack> {
            let mut items = self.items.lock().unwrap();
            let id = items.len() as i64 + 1;
            items.push(Ingredient {
                id,
                name: draft.name.clone(),
                expiry_date: draft.expiry_date.clone(),
                quantity: None,
                category: None,
                days_until_expiry: None,
                date_added: None,
            });
            Ok(Ack {
                id: Some(id),
                ..Default::default()
            })
        }

        async fn update_ingredient(&self, id: i64, draft: &IngredientDraft) -> ClientResult<Ack> {
            let mut items = self.items.lock().unwrap();
            let item = items.iter_mut().find(|i| i.id == id).ok_or_else(not_found)?;
            item.name = draft.name.clone();
            Ok(Ack::default())
        }

        async fn delete_ingredient(&self, id: i64) -> ClientResult<Ack> {
            self.items.lock().unwrap().retain(|i| i.id != id);
            Ok(Ack::default())
        }

        async fn recipe_suggestions(&self, days: u32) -> ClientResult<RecipeSuggestions> {
            let delay = if days <= 3 { 80 } else { 5 };
            tokio::time::sleep(Duration::from_millis(delay)).await;

            Ok(RecipeSuggestions {
                recipes: vec![Recipe {
                    id: days as i64,
                    title: format!("{}-day special", days),
                    image: None,
                    ready_in_minutes: None,
                    servings: None,
                    used_ingredient_count: 1,
                    missed_ingredient_count: 1,
                    used_ingredients: vec!["milk".to_string()],
                    missed_ingredients: vec!["flour".to_string()],
                    summary: None,
                    source_url: None,
                    instructions: Vec::new(),
                }],
                expiring_ingredients: vec!["milk".to_string()],
                ..Default::default()
            })
        }

        async fn seed_test_data(&self) -> ClientResult<Ack> {
            *self.items.lock().unwrap() = sample_items(&["Milk", "Bread"]);
            Ok(Ack::default())
        }

        async fn reset_database(&self) -> ClientResult<Ack> {
            let mut items = self.items.lock().unwrap();
            let deleted = items.len() as u64;
            items.clear();
            Ok(Ack {
                deleted_count: Some(deleted),
                ..Default::default()
            })
        }
    }

    fn draft(name: &str) -> IngredientDraft {
        IngredientDraft {
            name: name.to_string(),
            expiry_date: "2025-09-01".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_dashboard() {
        let session = Session::new(FakeApi::with_items(&["Milk", "Bread", "Rice"]));
        let view = session.load_dashboard().await;

        assert!(!view.is_loading());
        assert_eq!(view.stats().total_ingredients, 3);
        // Day counts are 0, 4 and 8; only the first two fall within a week.
        assert_eq!(view.rows(crate::view::testing::today()).len(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_survives_stats_failure() {
        let mut api = FakeApi::with_items(&["Milk"]);
        api.fail_stats = true;
        let session = Session::new(api);

        let view = session.load_dashboard().await;
        assert_eq!(*view.stats(), Stats::default());
        assert_eq!(view.rows(crate::view::testing::today()).len(), 1);
    }

    #[tokio::test]
    async fn test_create_refetches_list() {
        let session = Session::new(FakeApi::with_items(&["Milk"]));
        let mut view = IngredientsView::new();
        session.refresh_ingredients(&mut view).await;

        view.open_add();
        *view.draft_mut() = draft("Eggs");
        let mutation = view.submit().unwrap();

        assert_eq!(session.run_mutation(&mut view, mutation).await, None);
        assert!(!view.is_form_open());
        assert!(view.ingredients().iter().any(|i| i.name == "Eggs"));
    }

    #[tokio::test]
    async fn test_update_missing_id_alerts_verbatim() {
        let session = Session::new(FakeApi::with_items(&["Milk"]));
        let mut view = IngredientsView::new();
        view.begin_edit(42, draft("Ghost"));
        let mutation = view.submit().unwrap();

        let alert = session.run_mutation(&mut view, mutation).await;
        assert_eq!(alert.as_deref(), Some("Ingredient not found"));
        assert_eq!(session.api().names(), vec!["Milk".to_string()]);
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let session = Session::new(FakeApi::with_items(&["Milk", "Bread"]));
        let mut view = IngredientsView::new();
        session.refresh_ingredients(&mut view).await;

        view.request_delete(1);
        view.cancel_delete();
        assert!(view.confirm_delete().is_none());
        assert_eq!(session.api().names().len(), 2);

        view.request_delete(1);
        let mutation = view.confirm_delete().unwrap();
        assert_eq!(session.run_mutation(&mut view, mutation).await, None);
        assert_eq!(session.api().names(), vec!["Bread".to_string()]);
        assert_eq!(view.ingredients().len(), 1);
    }

    #[tokio::test]
    async fn test_latest_horizon_wins_over_slow_response() {
        let session = Session::new(FakeApi::default());
        let view = Mutex::new(RecipesView::new());

        // The 3-day request is issued first but answers last.
        let (slow, fast) = tokio::join!(
            session.select_horizon(&view, Horizon::Three),
            session.select_horizon(&view, Horizon::Fourteen),
        );
        assert!(!slow);
        assert!(fast);

        let view = view.lock().await;
        assert_eq!(view.horizon(), Horizon::Fourteen);
        match view.content() {
            RecipesContent::Grid { recipes, .. } => assert_eq!(recipes[0].title, "14-day special"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_refresh_uses_current_horizon() {
        let session = Session::new(FakeApi::default());
        let view = Mutex::new(RecipesView::new());

        assert!(session.refresh_recipes(&view).await);
        let view = view.lock().await;
        assert_eq!(view.selected_recipe(), None);
        match view.content() {
            RecipesContent::Grid { recipes, .. } => assert_eq!(recipes[0].id, 7),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_seed_and_reset() {
        let session = Session::new(FakeApi::default());
        session.seed().await.unwrap();
        assert_eq!(session.api().names().len(), 2);

        let ack = session.reset().await.unwrap();
        assert_eq!(ack.deleted_count, Some(2));
        assert!(session.api().names().is_empty());
    }
}
