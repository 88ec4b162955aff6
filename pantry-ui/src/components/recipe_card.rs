//! Recipe Card Component
//!
//! Grid card for one recipe suggestion. Clicking the card opens the
//! detail modal; the source link opens the original recipe instead.

use leptos::*;
use pantry::matching::MatchQuality;
use pantry::render;
use pantry::view::TagPreview;
use pantry::Recipe;

/// Badge colors for a match quality
fn match_colors(quality: MatchQuality) -> &'static str {
    match quality {
        MatchQuality::High => "bg-green-900 text-green-300",
        MatchQuality::Medium => "bg-yellow-900 text-yellow-300",
        MatchQuality::Low => "bg-red-900 text-red-300",
    }
}

/// Recipe card component
#[component]
pub fn RecipeCard(recipe: Recipe, on_select: Callback<i64>) -> impl IntoView {
    let id = recipe.id;
    let score = recipe.match_score();

    view! {
        <div
            class="recipe-card bg-gray-800 rounded-xl overflow-hidden border border-gray-700
                   hover:border-gray-500 transition-colors cursor-pointer"
            on:click=move |_| on_select.call(id)
        >
            {recipe.image.clone().map(|src| view! {
                <img src=src alt=recipe.title.clone() class="w-full h-40 object-cover" />
            })}

            <div class="p-4 space-y-3">
                <h4 class="font-semibold text-lg">{recipe.title.clone()}</h4>

                <div class="flex items-center space-x-4 text-sm text-gray-400">
                    <span>"⏱️ "{render::ready_time(&recipe)}</span>
                    <span>"👥 "{render::servings(&recipe)}" servings"</span>
                </div>

                <div class=format!(
                    "ingredient-match {} inline-block text-sm px-2 py-1 rounded {}",
                    score.quality().css_class(),
                    match_colors(score.quality())
                )>
                    {score.text()}
                </div>

                <CardTags label="You have:" tags=recipe.used_ingredients.clone() used=true />
                <CardTags label="You need:" tags=recipe.missed_ingredients.clone() used=false />

                {recipe.summary.clone().map(|summary| view! {
                    <p class="text-sm text-gray-400 line-clamp-3">{summary}</p>
                })}

                <div class="flex items-center space-x-2 pt-2">
                    <button class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded text-sm">
                        "View Recipe"
                    </button>
                    {recipe.source_url.clone().map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=|ev| ev.stop_propagation()
                            class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm"
                        >
                            "Original Source"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}

/// First few tags of a list with a "+N more" marker
#[component]
fn CardTags(label: &'static str, tags: Vec<String>, used: bool) -> impl IntoView {
    if tags.is_empty() {
        return ().into_view();
    }
    let preview = TagPreview::new(&tags);
    let shown = preview.shown.to_vec();
    let more = preview.more_label();

    view! {
        <div class="text-sm">
            <strong>{label}</strong>
            <div class="flex flex-wrap gap-1 mt-1">
                <IngredientTags tags=shown used=used />
                {more.map(|m| view! {
                    <span class="px-2 py-0.5 rounded-full bg-gray-700 text-gray-300 text-xs">{m}</span>
                })}
            </div>
        </div>
    }
    .into_view()
}

/// Ingredient name chips
#[component]
pub fn IngredientTags(tags: Vec<String>, used: bool) -> impl IntoView {
    let color = if used {
        "bg-green-900 text-green-300"
    } else {
        "bg-red-900 text-red-300"
    };

    tags.into_iter()
        .map(|tag| view! {
            <span class=format!("px-2 py-0.5 rounded-full text-xs {}", color)>{tag}</span>
        })
        .collect_view()
}
