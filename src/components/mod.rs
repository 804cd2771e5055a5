//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod diagnostics;
pub mod lab_results;
pub mod loading;
pub mod nav;
pub mod profile;
pub mod roster;
pub mod vitals;

pub use chart::BloodPressureChart;
pub use diagnostics::DiagnosticTable;
pub use lab_results::LabResults;
pub use loading::{ErrorMessage, Loading};
pub use nav::Nav;
pub use profile::ProfileCard;
pub use roster::PatientRoster;
pub use vitals::VitalsPanel;
