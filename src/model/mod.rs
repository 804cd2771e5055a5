//! Data Model
//!
//! Patient records as served by the remote collection endpoint.

pub mod patient;

pub use patient::{
    BloodPressure, DiagnosisRecord, DiagnosticEntry, Patient, Trend, VitalReading,
};
