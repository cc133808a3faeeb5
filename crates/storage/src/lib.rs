//! Storage access for the climate query service.
//!
//! Provides the SQLite-backed catalog over the pre-populated
//! `measurement` and `station` tables.

pub mod catalog;

pub use catalog::{Catalog, ObservationRow, PrecipitationRow, StationRow, TobsSummary};
