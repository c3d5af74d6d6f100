//! Error Banner Component
//!
//! Replaces page content when a fetch fails; offers a manual retry.

use leptos::*;

/// Error banner with retry control
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: String,
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6 text-center space-y-4">
            <div class="flex items-center justify-center space-x-2 text-red-400">
                <span class="text-lg">"✕"</span>
                <span class="font-medium">{message}</span>
            </div>
            <button
                on:click=move |_| on_retry.call(())
                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
            >
                "Retry"
            </button>
        </div>
    }
}
