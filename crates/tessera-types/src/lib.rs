//! # tessera-types
//!
//! Shared identifiers, error types, and generator defaults
//! for the Tessera mesh toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Tessera crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{TesseraError, TesseraResult};
pub use ids::MaterialId;
