//! Data shaping for bird observation charts, maps, and tables.
//!
//! This crate turns normalized observation records into the forms the
//! rendering collaborator consumes: per-species time series, (date,
//! species) aggregates, map views, and column-projected tables.

pub mod aggregate;
pub mod filter;
pub mod map;
pub mod series;
pub mod stats;
pub mod table;
