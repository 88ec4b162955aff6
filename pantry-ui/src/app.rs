//! App Root Component
//!
//! Main application component with routing. Exactly one page is mounted
//! at a time; unknown paths render the dashboard.

use leptos::*;
use leptos_router::*;
use pantry::view::Page;

use crate::components::Nav;
use crate::pages::{Dashboard, Ingredients, Recipes};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=Page::Dashboard.path() view=Dashboard />
                        <Route path=Page::Ingredients.path() view=Ingredients />
                        <Route path=Page::Recipes.path() view=Recipes />
                        <Route path="/*any" view=Dashboard />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Current calendar date in the browser's time zone
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Show a blocking alert; if the browser refuses, log it to the console
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        web_sys::console::error_2(&alert_failure(message).into(), &e);
    }
}

fn alert_failure(message: &str) -> String {
    format!("Failed to show alert: {}", message)
}

/// Ask a yes/no question; a failed prompt counts as "no"
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_alert_failure_keeps_message() {
        let text = alert_failure("Ingredient not found");
        assert_eq!(text, "Failed to show alert: Ingredient not found");
        web_sys::console::error_2(&text.into(), &"blocked".into());
    }
}
