//! Dashboard Page
//!
//! The single page: patient roster beside the selected patient's detail
//! panel (chart, vitals, diagnostics, profile, lab results).

use leptos::*;

use crate::components::{
    BloodPressureChart, DiagnosticTable, LabResults, PatientRoster, ProfileCard, VitalsPanel,
};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="grid lg:grid-cols-[320px_minmax(0,1fr)_320px] gap-6 items-start">
            <PatientRoster />

            <div class="space-y-6">
                <section class="bg-white rounded-xl p-6">
                    <h2 class="text-lg font-bold mb-4">"Diagnosis History"</h2>
                    <BloodPressureChart />
                    <VitalsPanel />
                </section>

                <DiagnosticTable />
            </div>

            <div class="space-y-6">
                <ProfileCard />
                <LabResults />
            </div>
        </div>
    }
}
