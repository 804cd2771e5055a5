//! App Root Component
//!
//! Application shell: global state, the startup fetch, and the
//! loading → error | dashboard switch.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{ErrorMessage, Loading, Nav};
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};

/// Single message for any fetch failure; the cause goes to the console.
pub const FETCH_ERROR_MESSAGE: &str = "Error loading patient data. Please try again.";

/// Shown when the endpoint answers with an empty collection.
pub const EMPTY_ROSTER_MESSAGE: &str = "No patient records are available.";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The one suspension point in the system: a single fetch on mount.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_patients().await {
                Ok(patients) if patients.is_empty() => {
                    state.fail(EMPTY_ROSTER_MESSAGE);
                }
                Ok(patients) => {
                    state.initialize(patients);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("patient fetch failed: {e}").into());
                    state.fail(FETCH_ERROR_MESSAGE);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <Router>
            <div class="min-h-screen bg-slate-100 text-slate-900 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-6">
                    <Routes>
                        <Route path="/" view=Content />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Loading indicator until the fetch resolves, then the error text or the
/// dashboard. The roster and detail panel never render on a failed fetch.
#[component]
fn Content() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            if state.loading.get() {
                view! { <Loading /> }.into_view()
            } else if let Some(message) = state.error.get() {
                view! { <ErrorMessage message=message /> }.into_view()
            } else {
                view! { <Dashboard /> }.into_view()
            }
        }}
    }
}

/// 404 page for anything but the dashboard route.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <A
                href="/"
                class="mt-4 px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
