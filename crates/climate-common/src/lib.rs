//! Common types shared across the climate-api workspace.

pub mod error;

pub use error::{ClimateError, ClimateResult};
