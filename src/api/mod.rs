//! HTTP API Client
//!
//! Retrieval of the patient collection from the records endpoint.

pub mod client;

pub use client::{fetch_patients, FetchError};
