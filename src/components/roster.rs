//! Patient Roster
//!
//! Selectable list of all fetched patients. Exactly one entry is
//! highlighted: the one matching the current selection by name.

use leptos::*;

use crate::state::global::GlobalState;

/// Roster of all patients with the current selection highlighted.
#[component]
pub fn PatientRoster() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <aside class="bg-white rounded-xl p-4 lg:h-[calc(100vh-8rem)] lg:overflow-y-auto">
            <h2 class="text-lg font-bold px-2 mb-3">"Patients"</h2>

            <div class="space-y-1">
                {move || {
                    state
                        .patients
                        .get()
                        .into_iter()
                        .map(|patient| {
                            let active = state.is_selected(&patient);
                            let entry = patient.clone();
                            let state_for_click = state.clone();

                            let class = if active {
                                "w-full flex items-center gap-3 px-2 py-2 rounded-lg text-left bg-teal-100"
                            } else {
                                "w-full flex items-center gap-3 px-2 py-2 rounded-lg text-left hover:bg-slate-100"
                            };

                            view! {
                                <button
                                    class=class
                                    on:click=move |_| state_for_click.select(entry.clone())
                                >
                                    <img
                                        src=patient.profile_picture.clone()
                                        alt=patient.name.clone()
                                        class="w-11 h-11 rounded-full object-cover"
                                    />
                                    <div class="min-w-0">
                                        <div class="font-semibold text-sm truncate">
                                            {patient.name.clone()}
                                        </div>
                                        <div class="text-xs text-slate-500">
                                            {format!("{}, {}", patient.gender, patient.age)}
                                        </div>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </aside>
    }
}
