//! Loading Component

use leptos::*;

/// Loading spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <span>{m}</span> })}
        </div>
    }
}
