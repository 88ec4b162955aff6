//! Dashboard Page
//!
//! Pantry totals and the ingredients expiring this week.

use leptos::*;
use pantry::view::dashboard::NOTHING_EXPIRING;
use pantry::view::{DashboardView, EXPIRING_HORIZON_DAYS};
use pantry::ClientResult;

use crate::api;
use crate::app::today;
use crate::components::{IngredientCard, Loading};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = create_rw_signal(DashboardView::new());

    // Both feeds load independently on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_stats().await;
            deliver(state, "Failed to fetch stats", result, DashboardView::apply_stats);
        });

        spawn_local(async move {
            let result = api::fetch_expiring(EXPIRING_HORIZON_DAYS).await;
            deliver(
                state,
                "Failed to fetch expiring ingredients",
                result,
                DashboardView::apply_expiring,
            );
        });
    });

    let stats = move || state.with(|s| *s.stats());

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"What's in the pantry and what needs using up"</p>
            </div>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Total Ingredients" value=Signal::derive(move || stats().total_ingredients) color="text-white" />
                <StatCard label="Fresh" value=Signal::derive(move || stats().fresh) color="text-green-400" />
                <StatCard label="Expiring Soon" value=Signal::derive(move || stats().expiring_soon) color="text-orange-400" />
                <StatCard label="Expired" value=Signal::derive(move || stats().expired) color="text-red-400" />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Ingredients Expiring This Week"</h2>

                {move || {
                    if state.with(|s| s.is_loading()) {
                        return view! { <Loading /> }.into_view();
                    }

                    let rows = state.with(|s| s.rows(today()));
                    if rows.is_empty() {
                        view! {
                            <p class="text-gray-400 text-center py-8">{NOTHING_EXPIRING}</p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {rows.into_iter()
                                    .map(|row| view! { <IngredientCard row=row /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Log a failed feed and apply the result. Returns `false` when the page
/// was unmounted before the response arrived.
fn deliver<T>(
    state: RwSignal<DashboardView>,
    context: &str,
    result: ClientResult<T>,
    apply: fn(&mut DashboardView, ClientResult<T>),
) -> bool {
    if let Err(e) = &result {
        api::log_error(context, e);
    }
    state.try_update(|s| apply(s, result)).is_some()
}

#[component]
fn StatCard(label: &'static str, value: Signal<u32>, color: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <p class="text-sm text-gray-400">{label}</p>
            <p class=format!("text-3xl font-bold mt-2 {}", color)>{move || value.get()}</p>
        </div>
    }
}
