//! Navigation Component
//!
//! Header navigation bar with brand and page links.

use leptos::*;
use leptos_router::*;
use pantry::view::Page;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🥫"</span>
                        <span class="text-xl font-bold text-white">"Ingredient Tracker"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {Page::ALL
                            .into_iter()
                            .map(|page| view! { <NavLink page=page /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    view! {
        <A
            href=page.path()
            exact=page == Page::Dashboard
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {page.title()}
        </A>
    }
}
