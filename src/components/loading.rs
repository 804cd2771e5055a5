//! Loading Component
//!
//! Startup loading indicator and the error block that replaces it when the
//! fetch fails.

use leptos::*;

/// Full-page loading indicator shown while the patient fetch is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 text-slate-500">
            <div class="w-8 h-8 border-4 border-teal-300 border-t-transparent rounded-full animate-spin" />
            <p class="mt-4 text-sm">"Loading patient data..."</p>
        </div>
    }
}

/// Error text replacing the loading indicator. The roster and detail panel
/// are never shown alongside it.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <p class="text-red-600 font-medium">{message}</p>
        </div>
    }
}
