//! HTTP client for the Google Geocoding and Places REST APIs.
//!
//! Wraps `reqwest` with provider-specific error handling, API key
//! management, and typed response deserialization. Every endpoint checks
//! the `"status"` field in the JSON envelope and surfaces API-level errors
//! as [`PlacesError::ApiError`]; a geocode with no results becomes
//! [`PlacesError::AreaNotFound`].

mod client;
mod error;
mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::NearbyPlace;
