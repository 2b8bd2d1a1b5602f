//! Merge plan validation.
//!
//! Validates plans before any source is built, catching bad
//! generator parameters early with a path to the offending entry
//! (e.g. `source[1].source[0]`).

use tessera_types::{TesseraError, TesseraResult};
use tracing::warn;

use crate::plan::{MergePlan, SourceSpec};

/// Validates a complete merge plan.
///
/// Checks:
/// - Grid subdivisions are at least 1 and extents are positive
/// - Sphere radius is positive, with at least 2 stacks and 3 slices
/// - Mesh paths are not empty
///
/// Empty merges are legal (they contribute nothing) but logged.
pub fn validate_plan(plan: &MergePlan) -> TesseraResult<()> {
    if plan.sources.is_empty() {
        warn!("merge plan has no sources; the result will be empty");
    }
    for (i, source) in plan.sources.iter().enumerate() {
        validate_source(source, &format!("source[{i}]"))?;
    }
    Ok(())
}

/// Validates a single source. `at` names its position for error messages.
pub fn validate_source(source: &SourceSpec, at: &str) -> TesseraResult<()> {
    match source {
        SourceSpec::QuadGrid {
            cols,
            rows,
            width,
            height,
        } => {
            if *cols == 0 || *rows == 0 {
                return Err(invalid(at, "quad_grid needs at least one column and one row"));
            }
            if !is_positive(*width) || !is_positive(*height) {
                return Err(invalid(
                    at,
                    &format!("quad_grid extent must be positive, got {width} x {height}"),
                ));
            }
        }
        SourceSpec::UvSphere {
            radius,
            stacks,
            slices,
        } => {
            if !is_positive(*radius) {
                return Err(invalid(
                    at,
                    &format!("uv_sphere radius must be positive, got {radius}"),
                ));
            }
            if *stacks < 2 || *slices < 3 {
                return Err(invalid(
                    at,
                    &format!("uv_sphere needs >= 2 stacks and >= 3 slices, got {stacks} / {slices}"),
                ));
            }
        }
        SourceSpec::Mesh { path } => {
            if path.as_os_str().is_empty() {
                return Err(invalid(at, "mesh path is empty"));
            }
        }
        SourceSpec::Merge { sources } => {
            if sources.is_empty() {
                warn!(at, "nested merge has no sources");
            }
            for (i, source) in sources.iter().enumerate() {
                validate_source(source, &format!("{at}.source[{i}]"))?;
            }
        }
    }
    Ok(())
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(at: &str, message: &str) -> TesseraError {
    TesseraError::InvalidConfig(format!("{at}: {message}"))
}
