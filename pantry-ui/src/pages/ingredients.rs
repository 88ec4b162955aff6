//! Ingredients Page
//!
//! Full ingredient list with add, edit and delete. Every successful write
//! refetches the whole list.

use leptos::*;
use pantry::view::ingredients::{DELETE_PROMPT, NO_INGREDIENTS};
use pantry::view::{IngredientRow, IngredientsView, Mutation, MutationOutcome};

use crate::api;
use crate::app::{alert, confirm, today};
use crate::components::{IngredientCard, IngredientForm, Loading};

/// Parts of the view the page renders from. Draft edits change none of
/// them, so typing in the form never remounts the form or the grid.
#[derive(Clone, Copy)]
struct Slices {
    form_open: Memo<bool>,
    loading: Memo<bool>,
    rows: Memo<Vec<IngredientRow>>,
}

impl Slices {
    fn new(state: RwSignal<IngredientsView>) -> Self {
        Self {
            form_open: create_memo(move |_| state.with(|s| s.is_form_open())),
            loading: create_memo(move |_| state.with(|s| s.is_loading())),
            rows: create_memo(move |_| state.with(|s| s.rows(today()))),
        }
    }
}

/// Ingredients page component
#[component]
pub fn Ingredients() -> impl IntoView {
    let state = create_rw_signal(IngredientsView::new());
    let slices = Slices::new(state);

    let refresh = move || {
        spawn_local(async move {
            let result = api::fetch_ingredients().await;
            if let Err(e) = &result {
                api::log_error("Failed to fetch ingredients", e);
            }
            state.try_update(|s| s.apply_list(result));
        });
    };

    let perform = move |mutation: Mutation| {
        spawn_local(async move {
            let result = api::send_mutation(&mutation).await;
            if let Err(e) = &result {
                api::log_error(mutation.failure_fallback(), e);
            }
            match state.try_update(|s| s.complete(&mutation, result)) {
                Some(MutationOutcome::Refetch) => refresh(),
                Some(MutationOutcome::Alert(message)) => alert(&message),
                // Page was unmounted while the request was in flight
                None => {}
            }
        });
    };

    create_effect(move |_| refresh());

    let on_submit = Callback::new(move |_: ()| match state.with_untracked(|s| s.submit()) {
        Ok(mutation) => perform(mutation),
        Err(e) => alert(&e.to_string()),
    });

    let on_cancel = Callback::new(move |_: ()| state.update(|s| s.cancel_form()));

    let on_edit = Callback::new(move |id: i64| {
        state.update(|s| {
            s.open_edit(id);
        })
    });

    let on_delete = Callback::new(move |id: i64| {
        state.update(|s| s.request_delete(id));
        if confirm(DELETE_PROMPT) {
            if let Some(mutation) = state.try_update(|s| s.confirm_delete()).flatten() {
                perform(mutation);
            }
        } else {
            state.update(|s| s.cancel_delete());
        }
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Manage Ingredients"</h1>
                <button
                    on:click=move |_| state.update(|s| s.open_add())
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Ingredient"
                </button>
            </div>

            <Show when=move || slices.form_open.get()>
                <IngredientForm state=state on_submit=on_submit on_cancel=on_cancel />
            </Show>

            {move || {
                if slices.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let rows = slices.rows.get();
                if rows.is_empty() {
                    view! {
                        <p class="text-gray-400 text-center py-12">{NO_INGREDIENTS}</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {rows.into_iter()
                                .map(|row| view! {
                                    <IngredientCard row=row on_edit=on_edit on_delete=on_delete />
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
