//! Recipes Page
//!
//! Recipe suggestions for ingredients expiring within a chosen horizon.
//! Only the response to the latest request is ever shown.

use leptos::*;
use pantry::view::recipes::{
    EMPTY_PANTRY_HINT, EMPTY_PANTRY_TITLE, NO_MATCHES_HINT, NO_MATCHES_TITLE,
};
use pantry::view::{Horizon, RequestToken, RecipesContent, RecipesView};

use crate::api;
use crate::components::{Loading, RecipeCard, RecipeModal};

/// Recipes page component
#[component]
pub fn Recipes() -> impl IntoView {
    let state = create_rw_signal(RecipesView::new());

    // Opening the modal must not rebuild the grid
    let fetch_state = create_memo(move |_| state.with(|s| s.state().clone()));
    let expiring = create_memo(move |_| state.with(|s| s.expiring_ingredients().to_vec()));
    let selected = create_memo(move |_| state.with(|s| s.selected_recipe().cloned()));

    let fetch = move |token: RequestToken, days: u32| {
        spawn_local(async move {
            let result = api::fetch_recipe_suggestions(days).await;
            if let Err(e) = &result {
                api::log_error("Error fetching recipes", e);
            }
            state.try_update(|s| s.apply(token, result));
        });
    };

    let refresh = move || {
        if let Some((token, days)) = state.try_update(|s| (s.refresh(), s.horizon().days())) {
            fetch(token, days);
        }
    };

    let select = move |horizon: Horizon| {
        if let Some(token) = state.try_update(|s| s.select_horizon(horizon)) {
            fetch(token, horizon.days());
        }
    };

    create_effect(move |_| refresh());

    let on_select = Callback::new(move |id: i64| state.update(|s| s.select_recipe(id)));
    let on_close = Callback::new(move |_: ()| state.update(|s| s.close_recipe()));

    view! {
        <div class="space-y-8">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-3xl font-bold">"Recipe Suggestions"</h1>

                <div class="flex items-center space-x-3">
                    <label class="text-sm text-gray-400">"Show recipes for ingredients expiring in:"</label>
                    <select
                        class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            let selected = event_target_value(&ev)
                                .parse::<u32>()
                                .ok()
                                .and_then(|days| Horizon::try_from(days).ok());
                            if let Some(horizon) = selected {
                                select(horizon);
                            }
                        }
                    >
                        {Horizon::ALL.into_iter().map(|horizon| view! {
                            <option
                                value=horizon.days().to_string()
                                selected=move || state.with(|s| s.horizon() == horizon)
                            >
                                {horizon.to_string()}
                            </option>
                        }).collect_view()}
                    </select>

                    <button
                        on:click=move |_| refresh()
                        disabled=move || state.with(|s| s.is_loading())
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 rounded-lg font-medium"
                    >
                        {move || if state.with(|s| s.is_loading()) { "Loading..." } else { "Refresh Recipes" }}
                    </button>
                </div>
            </div>

            {move || {
                let expiring = expiring.get();
                (!expiring.is_empty()).then(|| view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h3 class="font-semibold mb-3">"Ingredients Expiring Soon"</h3>
                        <div class="flex flex-wrap gap-2">
                            {expiring.into_iter().map(|name| view! {
                                <span class="px-3 py-1 rounded-full bg-orange-900 text-orange-300 text-sm">{name}</span>
                            }).collect_view()}
                        </div>
                    </section>
                })
            }}

            {move || {
                // Subscribe to the fetch state only
                fetch_state.with(|_| ());
                state.with_untracked(|s| content_view(s, refresh, on_select))
            }}

            {move || selected.get().map(|recipe| view! {
                <RecipeModal recipe=recipe on_close=on_close />
            })}
        </div>
    }
}

/// Page body for the current fetch state
fn content_view(
    s: &RecipesView,
    refresh: impl Fn() + Copy + 'static,
    on_select: Callback<i64>,
) -> View {
    match s.content() {
        RecipesContent::Loading => {
            view! { <Loading message="Finding recipes with your ingredients..." /> }.into_view()
        }
        RecipesContent::Failed(message) => {
            let message = message.to_string();
            view! {
                <div class="bg-red-900/40 border border-red-700 rounded-xl p-6 text-center space-y-4">
                    <p class="text-red-300">"Error: "{message}</p>
                    <button
                        on:click=move |_| refresh()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg"
                    >
                        "Try Again"
                    </button>
                </div>
            }
            .into_view()
        }
        RecipesContent::EmptyPantry { message } => {
            empty_state(message, EMPTY_PANTRY_TITLE, EMPTY_PANTRY_HINT)
        }
        RecipesContent::NoMatches { message } => {
            empty_state(message, NO_MATCHES_TITLE, NO_MATCHES_HINT)
        }
        RecipesContent::Grid { message, recipes } => {
            let message = message.map(str::to_string);
            let recipes = recipes.to_vec();
            view! {
                <div class="space-y-4">
                    {message.map(|m| view! { <p class="text-gray-300">{m}</p> })}
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {recipes.into_iter()
                            .map(|recipe| view! { <RecipeCard recipe=recipe on_select=on_select /> })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_view()
        }
    }
}

fn empty_state(message: Option<&str>, title: &'static str, hint: &'static str) -> View {
    let message = message.map(str::to_string);
    view! {
        <div class="text-center py-12 space-y-3">
            {message.map(|m| view! { <p class="text-gray-300">{m}</p> })}
            <h3 class="text-xl font-semibold">{title}</h3>
            <p class="text-gray-400">{hint}</p>
        </div>
    }
    .into_view()
}
