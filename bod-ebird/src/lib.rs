//! Core types for bird observation data: the typed observation record, the
//! normalizer that admits raw eBird JSON into the pipeline, the error
//! taxonomy, and (behind the `api` feature) the eBird HTTP client.

pub mod date_range;
pub mod error;
pub mod observation;
pub mod session;

#[cfg(feature = "api")]
pub mod client;
