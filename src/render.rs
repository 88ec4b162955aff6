//! Plain-text rendering
//!
//! Terminal rendering of the view states, used by the CLI's table output.
//! The recipe meta helpers are shared with the browser UI.

use chrono::NaiveDate;

use crate::model::Recipe;
use crate::view::dashboard::NOTHING_EXPIRING;
use crate::view::ingredients::NO_INGREDIENTS;
use crate::view::recipes::{
    EMPTY_PANTRY_HINT, EMPTY_PANTRY_TITLE, NO_MATCHES_HINT, NO_MATCHES_TITLE,
};
use crate::view::{
    DashboardView, IngredientRow, IngredientsView, RecipesContent, RecipesView, TagPreview,
};

const LOADING: &str = "Loading...";

/// Preparation time, e.g. "25 min" or "Unknown min"
pub fn ready_time(recipe: &Recipe) -> String {
    match recipe.ready_in_minutes {
        Some(minutes) => format!("{} min", minutes),
        None => "Unknown min".to_string(),
    }
}

/// Serving count, or "Unknown"
pub fn servings(recipe: &Recipe) -> String {
    recipe
        .servings
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn dashboard(view: &DashboardView, today: NaiveDate) -> String {
    let stats = view.stats();
    let mut lines = vec![
        "Dashboard".to_string(),
        String::new(),
        format!("Total Ingredients: {}", stats.total_ingredients),
        format!("Fresh:             {}", stats.fresh),
        format!("Expiring Soon:     {}", stats.expiring_soon),
        format!("Expired:           {}", stats.expired),
        String::new(),
        "Ingredients Expiring This Week".to_string(),
    ];

    if view.is_loading() {
        lines.push(LOADING.to_string());
    } else {
        let rows = view.rows(today);
        if rows.is_empty() {
            lines.push(NOTHING_EXPIRING.to_string());
        } else {
            lines.extend(ingredient_table(&rows));
        }
    }

    lines.join("\n")
}

pub fn ingredients(view: &IngredientsView, today: NaiveDate) -> String {
    if view.is_loading() {
        return LOADING.to_string();
    }

    let rows = view.rows(today);
    if rows.is_empty() {
        return NO_INGREDIENTS.to_string();
    }
    ingredient_table(&rows).join("\n")
}

fn ingredient_table(rows: &[IngredientRow]) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{:<6} {:<20} {:<14} {:<14} {:<12} {}",
            "ID", "Name", "Quantity", "Category", "Expires", "Status"
        ),
        "-".repeat(86),
    ];

    for row in rows {
        lines.push(format!(
            "{:<6} {:<20} {:<14} {:<14} {:<12} {}",
            row.id,
            row.name,
            row.quantity_or_unspecified(),
            row.category_or_unspecified(),
            row.expiry_date,
            row.days_text
        ));
    }
    lines
}

pub fn recipes(view: &RecipesView) -> String {
    let mut lines = vec![
        format!("Recipe Suggestions ({})", view.horizon()),
        String::new(),
    ];

    if !view.expiring_ingredients().is_empty() {
        lines.push(format!(
            "Ingredients Expiring Soon: {}",
            view.expiring_ingredients().join(", ")
        ));
        lines.push(String::new());
    }

    match view.content() {
        RecipesContent::Loading => {
            lines.push("Finding recipes with your ingredients...".to_string())
        }
        RecipesContent::Failed(message) => lines.push(format!("Error: {}", message)),
        RecipesContent::EmptyPantry { message } => {
            lines.extend(message.map(str::to_string));
            lines.push(EMPTY_PANTRY_TITLE.to_string());
            lines.push(EMPTY_PANTRY_HINT.to_string());
        }
        RecipesContent::NoMatches { message } => {
            lines.extend(message.map(str::to_string));
            lines.push(NO_MATCHES_TITLE.to_string());
            lines.push(NO_MATCHES_HINT.to_string());
        }
        RecipesContent::Grid { message, recipes } => {
            if let Some(message) = message {
                lines.push(message.to_string());
                lines.push(String::new());
            }
            for recipe in recipes {
                lines.extend(recipe_card(recipe));
                lines.push(String::new());
            }
            lines.pop();
        }
    }

    lines.join("\n")
}

fn recipe_card(recipe: &Recipe) -> Vec<String> {
    let mut lines = vec![
        format!("[{}] {}", recipe.id, recipe.title),
        format!(
            "    {} | {} servings | {}",
            ready_time(recipe),
            servings(recipe),
            recipe.match_score()
        ),
    ];
    lines.extend(tag_line("You have", &recipe.used_ingredients));
    lines.extend(tag_line("You need", &recipe.missed_ingredients));
    lines
}

fn tag_line(label: &str, tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let preview = TagPreview::new(tags);
    let mut line = format!("    {}: {}", label, preview.shown.join(", "));
    if let Some(more) = preview.more_label() {
        line.push(' ');
        line.push_str(&more);
    }
    Some(line)
}

/// Full detail of one recipe
pub fn recipe_detail(recipe: &Recipe) -> String {
    let minutes = recipe
        .ready_in_minutes
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut lines = vec![
        recipe.title.clone(),
        String::new(),
        format!("Prep Time: {} minutes", minutes),
        format!("Servings:  {}", servings(recipe)),
        format!("Match:     {}", recipe.match_score()),
    ];

    if let Some(summary) = &recipe.summary {
        lines.extend([String::new(), "About This Recipe".to_string(), summary.clone()]);
    }
    if !recipe.used_ingredients.is_empty() {
        lines.push(String::new());
        lines.push(format!("Ingredients You Have: {}", recipe.used_ingredients.join(", ")));
    }
    if !recipe.missed_ingredients.is_empty() {
        lines.push(format!("Ingredients You Need: {}", recipe.missed_ingredients.join(", ")));
    }
    if !recipe.instructions.is_empty() {
        lines.extend([String::new(), "Instructions".to_string()]);
        for (i, instruction) in recipe.instructions.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, instruction.step));
        }
    }
    if let Some(url) = &recipe.source_url {
        lines.extend([String::new(), format!("Original recipe: {}", url)]);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::model::{Instruction, RecipeSuggestions, Stats};
    use crate::view::testing::{ingredient, today};

    fn recipe() -> Recipe {
        Recipe {
            id: 7,
            title: "Spinach Frittata".to_string(),
            image: None,
            ready_in_minutes: None,
            servings: Some(4),
            used_ingredient_count: 4,
            missed_ingredient_count: 1,
            used_ingredients: ["eggs", "spinach", "milk", "cheese"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            missed_ingredients: vec!["onion".to_string()],
            summary: Some("A weeknight classic.".to_string()),
            source_url: Some("https://example.com/frittata".to_string()),
            instructions: vec![
                Instruction { number: 1, step: "Whisk the eggs.".to_string() },
                Instruction { number: 2, step: "Bake for 20 minutes.".to_string() },
            ],
        }
    }

    #[test]
    fn test_dashboard_empty_list() {
        let mut view = DashboardView::new();
        view.apply_stats(Ok(Stats::default()));
        view.apply_expiring(Ok(Vec::new()));

        let text = dashboard(&view, today());
        assert!(text.contains("Total Ingredients: 0"));
        assert!(text.ends_with(NOTHING_EXPIRING));
    }

    #[test]
    fn test_ingredients_table() {
        let mut view = IngredientsView::new();
        assert_eq!(ingredients(&view, today()), LOADING);

        view.apply_list(Ok(Vec::new()));
        assert_eq!(ingredients(&view, today()), NO_INGREDIENTS);

        view.apply_list(Ok(vec![ingredient(3, "Yogurt", -2)]));
        let text = ingredients(&view, today());
        let row = text.lines().nth(2).unwrap();
        assert!(row.starts_with("3      Yogurt"));
        assert!(row.ends_with("Expired 2 days ago"));
    }

    #[test]
    fn test_recipe_card_lines() {
        let lines = recipe_card(&recipe());
        assert_eq!(lines[0], "[7] Spinach Frittata");
        assert_eq!(
            lines[1],
            "    Unknown min | 4 servings | 4/5 ingredients (80% match)"
        );
        assert_eq!(lines[2], "    You have: eggs, spinach, milk +1 more");
        assert_eq!(lines[3], "    You need: onion");
    }

    #[test]
    fn test_recipes_states() {
        let mut view = RecipesView::new();
        let token = view.refresh();
        view.apply(
            token,
            Ok(RecipeSuggestions {
                expiring_ingredients: vec!["kale".to_string()],
                ..Default::default()
            }),
        );
        let text = recipes(&view);
        assert!(text.starts_with("Recipe Suggestions (7 days)"));
        assert!(text.contains("Ingredients Expiring Soon: kale"));
        assert!(text.ends_with(NO_MATCHES_HINT));

        let token = view.refresh();
        view.apply(token, Err(ClientError::Network("refused".to_string())));
        assert!(recipes(&view).ends_with("Error: Failed to connect to the server"));
    }

    #[test]
    fn test_recipe_detail() {
        let text = recipe_detail(&recipe());
        assert!(text.contains("Prep Time: Unknown minutes"));
        assert!(text.contains("Ingredients You Need: onion"));
        assert!(text.contains("  2. Bake for 20 minutes."));
        assert!(text.ends_with("Original recipe: https://example.com/frittata"));
    }

    #[test]
    fn test_meta_helpers() {
        let mut r = recipe();
        assert_eq!(ready_time(&r), "Unknown min");
        r.ready_in_minutes = Some(25);
        r.servings = None;
        assert_eq!(ready_time(&r), "25 min");
        assert_eq!(servings(&r), "Unknown");
    }
}
