//! Diagnostic Table
//!
//! Diagnosed conditions for the selected patient, one row per entry in
//! input order.

use leptos::*;

use crate::state::global::GlobalState;

/// Table of the selected patient's diagnostic entries.
#[component]
pub fn DiagnosticTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-white rounded-xl p-6">
            <h2 class="text-lg font-bold mb-4">"Diagnostic List"</h2>

            <div class="max-h-64 overflow-y-auto">
                <table class="w-full text-sm">
                    <thead class="text-left text-slate-600 sticky top-0 bg-slate-100">
                        <tr>
                            <th class="px-4 py-3 rounded-l-full">"Problem/Diagnosis"</th>
                            <th class="px-4 py-3">"Description"</th>
                            <th class="px-4 py-3 rounded-r-full">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .selected
                                .get()
                                .map(|patient| patient.diagnostic_list)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|entry| view! {
                                    <tr class="border-b border-slate-100 last:border-0">
                                        <td class="px-4 py-3 font-medium">{entry.name}</td>
                                        <td class="px-4 py-3 text-slate-600">{entry.description}</td>
                                        <td class="px-4 py-3">{entry.status}</td>
                                    </tr>
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
