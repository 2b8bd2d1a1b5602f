//! Merge plans.
//!
//! A plan is an ordered list of sources, loaded from TOML, that builds
//! into a [`MergeMesh`]. Sources may themselves be nested merges.
//!
//! ```toml
//! name = "grid-and-ball"
//!
//! [[source]]
//! kind = "quad_grid"
//! cols = 4
//! rows = 4
//!
//! [[source]]
//! kind = "merge"
//!
//!   [[source.source]]
//!   kind = "uv_sphere"
//!   radius = 0.25
//!
//!   [[source.source]]
//!   kind = "mesh"
//!   path = "meshes/handle.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_mesh::generators::{quad_grid, uv_sphere};
use tessera_mesh::{boxed, BoxedComponent, MergeMesh};
use tessera_types::constants::{
    DEFAULT_GRID_RESOLUTION, DEFAULT_GRID_SIZE, DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_SLICES,
    DEFAULT_SPHERE_STACKS,
};
use tessera_types::{TesseraError, TesseraResult};
use tracing::{debug, info};

use crate::export::read_mesh;
use crate::validator::validate_plan;

/// A named, ordered list of sources to merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergePlan {
    /// Optional label, used in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Sources in merge order.
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceSpec>,
}

/// One entry of a merge plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    /// A flat quad grid (see [`quad_grid`]).
    QuadGrid {
        #[serde(default = "default_grid_resolution")]
        cols: usize,
        #[serde(default = "default_grid_resolution")]
        rows: usize,
        #[serde(default = "default_grid_size")]
        width: f32,
        #[serde(default = "default_grid_size")]
        height: f32,
    },

    /// A UV sphere (see [`uv_sphere`]).
    UvSphere {
        #[serde(default = "default_sphere_radius")]
        radius: f32,
        #[serde(default = "default_sphere_stacks")]
        stacks: usize,
        #[serde(default = "default_sphere_slices")]
        slices: usize,
    },

    /// A previously exported mesh file (`.json` or `.bin`).
    Mesh { path: PathBuf },

    /// A nested merge.
    Merge {
        #[serde(default, rename = "source")]
        sources: Vec<SourceSpec>,
    },
}

fn default_grid_resolution() -> usize {
    DEFAULT_GRID_RESOLUTION
}

fn default_grid_size() -> f32 {
    DEFAULT_GRID_SIZE
}

fn default_sphere_radius() -> f32 {
    DEFAULT_SPHERE_RADIUS
}

fn default_sphere_stacks() -> usize {
    DEFAULT_SPHERE_STACKS
}

fn default_sphere_slices() -> usize {
    DEFAULT_SPHERE_SLICES
}

impl MergePlan {
    /// Parses a plan from TOML text. Mesh paths are left as written.
    pub fn from_toml_str(content: &str) -> TesseraResult<Self> {
        toml::from_str(content)
            .map_err(|e| TesseraError::InvalidConfig(format!("Malformed merge plan: {e}")))
    }

    /// Loads a plan file, resolving relative mesh paths against its directory.
    pub fn load(path: impl AsRef<Path>) -> TesseraResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut plan = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            for source in &mut plan.sources {
                source.resolve_paths(base);
            }
        }
        info!(
            plan = %path.display(),
            sources = plan.sources.len(),
            "loaded merge plan"
        );
        Ok(plan)
    }

    /// Serializes the plan back to TOML.
    pub fn to_toml_string(&self) -> TesseraResult<String> {
        toml::to_string(self).map_err(|e| TesseraError::Serialization(e.to_string()))
    }

    /// Validates the plan and builds every source, in order.
    pub fn build(&self) -> TesseraResult<MergeMesh> {
        validate_plan(self)?;
        let merged = build_all(&self.sources)?;
        debug!(
            name = self.name.as_deref().unwrap_or("unnamed"),
            components = merged.len(),
            "built merge plan"
        );
        Ok(merged)
    }
}

impl SourceSpec {
    /// Builds this source into an owned component.
    ///
    /// Assumes the source has passed `validate_source`.
    pub fn build(&self) -> TesseraResult<BoxedComponent> {
        let component = match self {
            SourceSpec::QuadGrid {
                cols,
                rows,
                width,
                height,
            } => boxed(quad_grid(*cols, *rows, *width, *height)),
            SourceSpec::UvSphere {
                radius,
                stacks,
                slices,
            } => boxed(uv_sphere(*radius, *stacks, *slices)),
            SourceSpec::Mesh { path } => boxed(read_mesh(path)?),
            SourceSpec::Merge { sources } => boxed(build_all(sources)?),
        };
        Ok(component)
    }

    /// Short label for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceSpec::QuadGrid { .. } => "quad_grid",
            SourceSpec::UvSphere { .. } => "uv_sphere",
            SourceSpec::Mesh { .. } => "mesh",
            SourceSpec::Merge { .. } => "merge",
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        match self {
            SourceSpec::Mesh { path } if path.is_relative() => *path = base.join(&*path),
            SourceSpec::Merge { sources } => {
                for source in sources {
                    source.resolve_paths(base);
                }
            }
            _ => {}
        }
    }
}

fn build_all(sources: &[SourceSpec]) -> TesseraResult<MergeMesh> {
    sources.iter().map(SourceSpec::build).collect()
}
