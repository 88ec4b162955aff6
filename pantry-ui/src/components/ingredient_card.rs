//! Ingredient Card Component
//!
//! One ingredient with its expiry status. The dashboard shows the compact
//! form; the ingredients page adds edit and delete actions.

use leptos::*;
use pantry::view::IngredientRow;

/// Border and text colors for a status class
fn status_colors(css_class: &str) -> (&'static str, &'static str) {
    match css_class {
        "expired" => ("border-red-500", "text-red-400"),
        "expiring-soon" => ("border-orange-500", "text-orange-400"),
        "expiring-week" => ("border-yellow-500", "text-yellow-400"),
        "fresh" => ("border-green-500", "text-green-400"),
        _ => ("border-gray-600", "text-gray-400"),
    }
}

/// Ingredient card component
#[component]
pub fn IngredientCard(
    row: IngredientRow,
    /// Edit action; omitted on the dashboard
    #[prop(optional)]
    on_edit: Option<Callback<i64>>,
    #[prop(optional)]
    on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let (border, text) = status_colors(row.css_class());
    let id = row.id;
    let has_actions = on_edit.is_some() || on_delete.is_some();

    let actions = has_actions.then(|| {
        view! {
            <div class="flex items-center space-x-2">
                {on_edit.map(|cb| view! {
                    <button
                        on:click=move |_| cb.call(id)
                        class="text-gray-400 hover:text-white"
                        title="Edit"
                    >
                        "✏️"
                    </button>
                })}
                {on_delete.map(|cb| view! {
                    <button
                        on:click=move |_| cb.call(id)
                        class="text-gray-400 hover:text-red-400"
                        title="Delete"
                    >
                        "🗑️"
                    </button>
                })}
            </div>
        }
    });

    let details = if has_actions {
        view! {
            <div class="mt-3 space-y-1 text-sm text-gray-300">
                <p><strong>"Quantity: "</strong>{row.quantity_or_unspecified().to_string()}</p>
                <p><strong>"Category: "</strong>{row.category_or_unspecified().to_string()}</p>
                <p><strong>"Expires: "</strong>{row.expiry_date.clone()}</p>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="mt-1 text-sm text-gray-400">
                <p>{row.details()}</p>
                <p>"Expires: "{row.expiry_date.clone()}</p>
            </div>
        }
        .into_view()
    };

    view! {
        <div class=format!(
            "ingredient-card {} bg-gray-800 rounded-lg p-4 border-l-4 {}",
            row.css_class(),
            border
        )>
            <div class="flex items-start justify-between">
                <h4 class="font-semibold">{row.name.clone()}</h4>
                {actions}
            </div>
            {details}
            <p class=format!("mt-2 font-semibold {}", text)>{row.days_text.clone()}</p>
        </div>
    }
}
