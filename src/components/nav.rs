//! Navigation Component
//!
//! Header bar with the brand mark.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-slate-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🩺"</span>
                        <span class="text-xl font-bold text-slate-900">"Careboard"</span>
                    </A>

                    <span class="text-sm text-slate-500">"Patient Dashboard"</span>
                </div>
            </div>
        </nav>
    }
}
