//! Lab Results
//!
//! Available lab reports for the selected patient. Labels are opaque
//! display strings; each row carries a download affordance.

use leptos::*;

use crate::state::global::GlobalState;

/// List of the selected patient's lab results.
#[component]
pub fn LabResults() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-white rounded-xl p-6">
            <h2 class="text-lg font-bold mb-4">"Lab Results"</h2>

            <div class="space-y-1 max-h-64 overflow-y-auto">
                {move || {
                    state
                        .selected
                        .get()
                        .map(|patient| patient.lab_results)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|label| view! {
                            <div class="flex items-center justify-between px-3 py-2 rounded-lg hover:bg-slate-100">
                                <span class="text-sm">{label}</span>
                                <span class="text-slate-400" title="Download">"⤓"</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
