//! Recipe Modal Component
//!
//! Full details of one recipe: meta, summary, complete ingredient lists
//! and instructions.

use leptos::*;
use pantry::render;
use pantry::Recipe;

use super::IngredientTags;

/// Recipe detail modal
#[component]
pub fn RecipeModal(recipe: Recipe, on_close: Callback<()>) -> impl IntoView {
    let minutes = recipe
        .ready_in_minutes
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| on_close.call(())
        >
            <div
                class="bg-gray-800 rounded-xl w-full max-w-2xl mx-4 max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between p-6 border-b border-gray-700">
                    <h2 class="text-2xl font-semibold">{recipe.title.clone()}</h2>
                    <button
                        on:click=move |_| on_close.call(())
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6 space-y-6">
                    {recipe.image.clone().map(|src| view! {
                        <img src=src alt=recipe.title.clone() class="w-full rounded-lg" />
                    })}

                    <div class="grid grid-cols-3 gap-4 text-sm">
                        <div><strong>"⏱️ Prep Time: "</strong>{minutes}" minutes"</div>
                        <div><strong>"👥 Servings: "</strong>{render::servings(&recipe)}</div>
                        <div><strong>"🥘 Match: "</strong>{recipe.match_score().text()}</div>
                    </div>

                    {recipe.summary.clone().map(|summary| view! {
                        <section>
                            <h4 class="font-semibold mb-2">"About This Recipe"</h4>
                            <p class="text-gray-300">{summary}</p>
                        </section>
                    })}

                    {(!recipe.used_ingredients.is_empty()).then(|| view! {
                        <section>
                            <h4 class="font-semibold mb-2">"✅ Ingredients You Have"</h4>
                            <div class="flex flex-wrap gap-1">
                                <IngredientTags tags=recipe.used_ingredients.clone() used=true />
                            </div>
                        </section>
                    })}

                    {(!recipe.missed_ingredients.is_empty()).then(|| view! {
                        <section>
                            <h4 class="font-semibold mb-2">"🛒 Ingredients You Need"</h4>
                            <div class="flex flex-wrap gap-1">
                                <IngredientTags tags=recipe.missed_ingredients.clone() used=false />
                            </div>
                        </section>
                    })}

                    {(!recipe.instructions.is_empty()).then(|| view! {
                        <section>
                            <h4 class="font-semibold mb-2">"Instructions"</h4>
                            <ol class="list-decimal list-inside space-y-2 text-gray-300">
                                {recipe.instructions.iter().map(|instruction| view! {
                                    <li>{instruction.step.clone()}</li>
                                }).collect_view()}
                            </ol>
                        </section>
                    })}

                    <div class="flex justify-end space-x-3">
                        {recipe.source_url.clone().map(|url| view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg"
                            >
                                "View Original Recipe"
                            </a>
                        })}
                        <button
                            on:click=move |_| on_close.call(())
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg"
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
