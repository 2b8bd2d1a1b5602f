//! Vertex and triangle records carried by mesh streams.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tessera_types::MaterialId;

/// A single mesh vertex.
///
/// Opaque to the merge operator: it is relayed exactly as produced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Position in object space.
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// UV texture coordinate.
    pub tex_coord: Vec2,
}

impl MeshVertex {
    /// Creates a vertex from its position, normal and texture coordinate.
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// A triangle as three indices into the owning vertex stream, plus
/// a per-face material slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Triangle {
    /// Vertex indices `[v0, v1, v2]`.
    pub vertices: [u32; 3],
    /// Per-face material.
    pub material: MaterialId,
}

impl Triangle {
    /// Creates a triangle with the default material.
    pub fn new(vertices: [u32; 3]) -> Self {
        Self {
            vertices,
            material: MaterialId::default(),
        }
    }

    /// Sets the per-face material.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    /// Returns a copy with every vertex index increased by `offset`.
    ///
    /// The material is untouched.
    ///
    /// # Panics
    ///
    /// Panics if a shifted index exceeds the u32 index range.
    #[inline]
    pub fn shifted(self, offset: u32) -> Self {
        let shift = |index: u32| {
            index.checked_add(offset).unwrap_or_else(|| {
                panic!("shifted index {index} + {offset} exceeds u32 index range")
            })
        };
        let [a, b, c] = self.vertices;
        Self {
            vertices: [shift(a), shift(b), shift(c)],
            material: self.material,
        }
    }
}
