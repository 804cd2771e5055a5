//! Vitals Panel
//!
//! The four vital-sign readings from the selected patient's latest
//! diagnosis record.

use leptos::*;

use crate::model::Trend;
use crate::state::global::GlobalState;

/// Directional indicator for a reading, from its level label. Only systolic
/// blood pressure and heart rate carry one; a steady reading shows none.
pub fn trend_arrow(trend: Trend) -> Option<&'static str> {
    match trend {
        Trend::Rising => Some("↑"),
        Trend::Falling => Some("↓"),
        Trend::Steady => None,
    }
}

/// Grid of vital-sign cards for the latest diagnosis record.
#[component]
pub fn VitalsPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-2 xl:grid-cols-4 gap-4 mt-6">
            {move || {
                let latest = state
                    .selected
                    .get()
                    .and_then(|patient| patient.latest().cloned());

                match latest {
                    Some(latest) => view! {
                        <VitalCard
                            title="Systolic Pressure"
                            icon="🫀"
                            value=latest.blood_pressure.systolic.value.to_string()
                            unit="mmHg"
                            level=latest.blood_pressure.systolic.levels.clone()
                            arrow=trend_arrow(latest.blood_pressure.systolic.trend())
                        />
                        <VitalCard
                            title="Respiratory Rate"
                            icon="🫁"
                            value=latest.respiratory_rate.value.to_string()
                            unit="bpm"
                            level=latest.respiratory_rate.levels.clone()
                            arrow=None
                        />
                        <VitalCard
                            title="Temperature"
                            icon="🌡️"
                            value=latest.temperature.value.to_string()
                            unit="°F"
                            level=latest.temperature.levels.clone()
                            arrow=None
                        />
                        <VitalCard
                            title="Heart Rate"
                            icon="❤️"
                            value=latest.heart_rate.value.to_string()
                            unit="bpm"
                            level=latest.heart_rate.levels.clone()
                            arrow=trend_arrow(latest.heart_rate.trend())
                        />
                    }.into_view(),
                    None => view! {
                        <p class="col-span-full text-sm text-slate-500">
                            "No diagnosis history recorded"
                        </p>
                    }.into_view(),
                }
            }}
        </div>
    }
}

/// One vital-sign card: value with unit, level label, optional arrow.
#[component]
fn VitalCard(
    title: &'static str,
    icon: &'static str,
    value: String,
    unit: &'static str,
    #[prop(into)] level: String,
    arrow: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-50 rounded-xl p-4 border border-slate-200">
            <div class="flex items-center justify-between">
                <span class="text-2xl">{icon}</span>
                <span class="text-xs text-slate-500">{title}</span>
            </div>

            <div class="text-2xl font-bold mt-2">
                {value}
                <span class="text-sm font-normal text-slate-500 ml-1">{unit}</span>
            </div>

            <div class="mt-1 text-sm text-slate-600 flex items-center gap-1">
                {arrow.map(|glyph| view! {
                    <span class="font-semibold">{glyph}</span>
                })}
                <span>{level}</span>
            </div>
        </div>
    }
}
