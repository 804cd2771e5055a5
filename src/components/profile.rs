//! Profile Card
//!
//! Demographics, contact details and insurance for the selected patient.

use leptos::*;

use crate::state::global::GlobalState;

/// Date of birth formatted for display, e.g. "August 23, 1996". Input that
/// does not parse as an ISO date is shown as-is.
pub fn format_dob(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Gender glyph for the profile row. Values outside the binary pair get a
/// neutral glyph rather than defaulting to the male one.
pub fn gender_glyph(gender: &str) -> &'static str {
    match gender {
        "Female" => "♀",
        "Male" => "♂",
        _ => "⚧",
    }
}

/// Profile card for the selected patient.
#[component]
pub fn ProfileCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-white rounded-xl p-6">
            {move || {
                state.selected.get().map(|patient| view! {
                    <div class="flex flex-col items-center text-center">
                        <img
                            src=patient.profile_picture.clone()
                            alt=patient.name.clone()
                            class="w-24 h-24 rounded-full object-cover"
                        />
                        <h2 class="text-xl font-bold mt-4">{patient.name.clone()}</h2>
                    </div>

                    <dl class="mt-6 space-y-4">
                        <ProfileRow
                            icon="📅"
                            label="Date Of Birth"
                            value=format_dob(&patient.date_of_birth)
                        />
                        <ProfileRow
                            icon=gender_glyph(&patient.gender)
                            label="Gender"
                            value=patient.gender.clone()
                        />
                        <ProfileRow
                            icon="📞"
                            label="Contact Info"
                            value=patient.phone_number.clone()
                        />
                        <ProfileRow
                            icon="📞"
                            label="Emergency Contacts"
                            value=patient.emergency_contact.clone()
                        />
                        <ProfileRow
                            icon="🛡️"
                            label="Insurance Provider"
                            value=patient.insurance_type.clone()
                        />
                    </dl>
                })
            }}
        </section>
    }
}

/// One labelled profile row.
#[component]
fn ProfileRow(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <span class="w-10 h-10 rounded-full bg-slate-100 flex items-center justify-center text-lg">
                {icon}
            </span>
            <div>
                <dt class="text-xs text-slate-500">{label}</dt>
                <dd class="text-sm font-semibold text-slate-800">{value}</dd>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dob_full_month_day_year() {
        assert_eq!(format_dob("1996-08-23"), "August 23, 1996");
        assert_eq!(format_dob("2024-01-05"), "January 5, 2024");
    }

    #[test]
    fn test_format_dob_falls_back_to_raw_input() {
        assert_eq!(format_dob("unknown"), "unknown");
    }

    #[test]
    fn test_gender_glyph_choice() {
        assert_eq!(gender_glyph("Female"), "♀");
        assert_eq!(gender_glyph("Male"), "♂");
        assert_eq!(gender_glyph("Non-binary"), "⚧");
    }
}
