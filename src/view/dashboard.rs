//! Dashboard view state
//!
//! Aggregate counts plus the ingredients expiring within a fixed horizon.
//! Both feeds load independently; failures degrade to defaults and are
//! only logged.

use chrono::NaiveDate;

use super::IngredientRow;
use crate::error::ClientResult;
use crate::model::{Ingredient, Stats};

/// Horizon of the "expiring this week" list
pub const EXPIRING_HORIZON_DAYS: u32 = 7;

/// Shown when nothing expires within the horizon
pub const NOTHING_EXPIRING: &str = "No ingredients expiring in the next 7 days!";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    stats: Stats,
    expiring: Vec<Ingredient>,
    loading: bool,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    /// A freshly mounted dashboard, waiting for the expiring list
    pub fn new() -> Self {
        Self {
            stats: Stats::default(),
            expiring: Vec::new(),
            loading: true,
        }
    }

    pub fn apply_stats(&mut self, result: ClientResult<Stats>) {
        match result {
            Ok(stats) => self.stats = stats,
            Err(e) => tracing::warn!("Failed to fetch stats: {}", e),
        }
    }

    /// Apply the expiring-list response. This ends the loading state.
    pub fn apply_expiring(&mut self, result: ClientResult<Vec<Ingredient>>) {
        match result {
            Ok(items) => self.expiring = items,
            Err(e) => {
                tracing::warn!("Failed to fetch expiring ingredients: {}", e);
                self.expiring.clear();
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn rows(&self, today: NaiveDate) -> Vec<IngredientRow> {
        self.expiring
            .iter()
            .map(|ingredient| IngredientRow::new(ingredient, today))
            .collect()
    }
}
