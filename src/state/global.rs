//! Global Application State
//!
//! Reactive state management using Leptos signals. The fetched collection is
//! owned here for the session lifetime; rendering is read-only projection
//! and only an explicit user selection mutates the selected patient.

use leptos::*;

use crate::config;
use crate::model::Patient;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Full patient collection for the session.
    pub patients: RwSignal<Vec<Patient>>,
    /// Currently selected patient.
    pub selected: RwSignal<Option<Patient>>,
    /// Startup fetch in flight.
    pub loading: RwSignal<bool>,
    /// User-visible error replacing the content view.
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        patients: create_rw_signal(Vec::new()),
        selected: create_rw_signal(None),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Install a freshly fetched collection and resolve the startup
    /// selection.
    pub fn initialize(&self, patients: Vec<Patient>) {
        let selected = default_selection(&patients, config::DEFAULT_PATIENT).cloned();
        self.patients.set(patients);
        self.selected.set(selected);
    }

    /// Replace the current selection unconditionally. Roster highlighting,
    /// the detail panel and the chart all follow reactively.
    pub fn select(&self, patient: Patient) {
        self.selected.set(Some(patient));
    }

    /// True when `patient` is the current selection. Name is the
    /// collection's identity key.
    pub fn is_selected(&self, patient: &Patient) -> bool {
        self.selected.with(|selected| {
            selected
                .as_ref()
                .map(|current| current.name == patient.name)
                .unwrap_or(false)
        })
    }

    /// Put the view into its terminal error state.
    pub fn fail(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }
}

/// Resolve the startup selection: the entry named `preferred` when present,
/// the first entry otherwise. `None` only for an empty collection, which the
/// caller must surface as an error instead of rendering.
pub fn default_selection<'a>(patients: &'a [Patient], preferred: &str) -> Option<&'a Patient> {
    patients
        .iter()
        .find(|patient| patient.name == preferred)
        .or_else(|| patients.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(name: &str) -> Patient {
        Patient {
            name: name.to_string(),
            gender: "Female".to_string(),
            age: 30,
            profile_picture: String::new(),
            date_of_birth: "1994-01-01".to_string(),
            phone_number: String::new(),
            emergency_contact: String::new(),
            insurance_type: String::new(),
            diagnosis_history: Vec::new(),
            diagnostic_list: Vec::new(),
            lab_results: Vec::new(),
        }
    }

    #[test]
    fn test_default_selection_prefers_configured_name() {
        let patients = vec![patient("Ryan Johnson"), patient("Jessica Taylor")];
        let selected = default_selection(&patients, "Jessica Taylor").unwrap();
        assert_eq!(selected.name, "Jessica Taylor");
    }

    #[test]
    fn test_default_selection_falls_back_to_first() {
        let patients = vec![patient("Ryan Johnson"), patient("Ana Baker")];
        let selected = default_selection(&patients, "Jessica Taylor").unwrap();
        assert_eq!(selected.name, "Ryan Johnson");
    }

    #[test]
    fn test_default_selection_empty_roster() {
        assert!(default_selection(&[], "Jessica Taylor").is_none());
    }

    #[test]
    fn test_select_replaces_prior_selection() {
        let runtime = create_runtime();

        let state = GlobalState {
            patients: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        };

        state.initialize(vec![patient("Ryan Johnson"), patient("Jessica Taylor")]);
        assert!(state.is_selected(&patient("Jessica Taylor")));

        state.select(patient("Ryan Johnson"));
        state.select(patient("Jessica Taylor"));
        state.select(patient("Ryan Johnson"));

        // Exactly one selection survives any sequence of select calls.
        assert!(state.is_selected(&patient("Ryan Johnson")));
        assert!(!state.is_selected(&patient("Jessica Taylor")));

        runtime.dispose();
    }
}
