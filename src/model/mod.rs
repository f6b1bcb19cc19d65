//! Cake store data model module.
//!
//! # Purpose
//! Re-exports the cake record, its list projection, and the writable field
//! set shared by the API and store layers.
mod cake;

pub use cake::{Cake, CakeDraft, CakeSummary, timestamp};
