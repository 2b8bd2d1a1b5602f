//! Mesh export and import.
//!
//! Materialises any mesh component into a [`TriangleMesh`] and writes it
//! either as JSON (human-readable, the format plan `mesh` sources read)
//! or as compact `bincode` for large merges.

use std::path::Path;

use tessera_mesh::{MeshComponent, TriangleMesh};
use tessera_types::{TesseraError, TesseraResult};
use tracing::info;

/// On-disk mesh encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Binary,
}

impl ExportFormat {
    /// Picks a format from the file extension: `.bin` is binary,
    /// everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => ExportFormat::Binary,
            _ => ExportFormat::Json,
        }
    }
}

/// What an export wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub bytes: usize,
}

/// Encodes a mesh as JSON.
pub fn to_json(mesh: &TriangleMesh) -> TesseraResult<String> {
    serde_json::to_string(mesh)
        .map_err(|e| TesseraError::Serialization(format!("JSON serialization failed: {e}")))
}

/// Decodes a JSON mesh and validates it.
pub fn from_json(content: &str) -> TesseraResult<TriangleMesh> {
    let mesh: TriangleMesh = serde_json::from_str(content)
        .map_err(|e| TesseraError::Serialization(format!("JSON deserialization failed: {e}")))?;
    mesh.validate()?;
    Ok(mesh)
}

/// Encodes a mesh in compact binary form.
pub fn to_bytes(mesh: &TriangleMesh) -> TesseraResult<Vec<u8>> {
    bincode::serialize(mesh)
        .map_err(|e| TesseraError::Serialization(format!("Binary serialization failed: {e}")))
}

/// Decodes a binary mesh and validates it.
pub fn from_bytes(data: &[u8]) -> TesseraResult<TriangleMesh> {
    let mesh: TriangleMesh = bincode::deserialize(data)
        .map_err(|e| TesseraError::Serialization(format!("Binary deserialization failed: {e}")))?;
    mesh.validate()?;
    Ok(mesh)
}

/// Drains `component` and writes the result to `path`.
pub fn export<C>(
    component: &C,
    path: impl AsRef<Path>,
    format: ExportFormat,
) -> TesseraResult<ExportSummary>
where
    C: MeshComponent + ?Sized,
{
    let path = path.as_ref();
    let mesh = TriangleMesh::from_component(component)?;

    let bytes = match format {
        ExportFormat::Json => to_json(&mesh)?.into_bytes(),
        ExportFormat::Binary => to_bytes(&mesh)?,
    };
    std::fs::write(path, &bytes)?;

    let summary = ExportSummary {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        bytes: bytes.len(),
    };
    info!(
        path = %path.display(),
        ?format,
        vertices = summary.vertex_count,
        triangles = summary.triangle_count,
        bytes = summary.bytes,
        "exported mesh"
    );
    Ok(summary)
}

/// Reads a mesh file, choosing the decoder from the extension.
pub fn read_mesh(path: impl AsRef<Path>) -> TesseraResult<TriangleMesh> {
    let path = path.as_ref();
    match ExportFormat::from_path(path) {
        ExportFormat::Json => from_json(&std::fs::read_to_string(path)?),
        ExportFormat::Binary => from_bytes(&std::fs::read(path)?),
    }
}
