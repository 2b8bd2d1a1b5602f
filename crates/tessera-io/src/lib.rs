//! # tessera-io
//!
//! The edges of Tessera: merge plans loaded from TOML, plan validation,
//! and mesh export/import (JSON and binary).
//!
//! Everything here returns `TesseraResult`; the stream core never fails.

pub mod export;
pub mod plan;
pub mod validator;

pub use export::{export, read_mesh, ExportFormat, ExportSummary};
pub use plan::{MergePlan, SourceSpec};
pub use validator::validate_plan;
