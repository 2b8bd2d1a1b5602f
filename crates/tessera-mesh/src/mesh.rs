//! Buffered triangle mesh with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! A `TriangleMesh` is a mesh component in its own right (its streams
//! borrow the buffers) and the landing spot for materialising any
//! other component's streams.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tessera_types::{MaterialId, TesseraError, TesseraResult};

use crate::component::{MeshComponent, TriangleSource, VertexSource};
use crate::stream::{MeshStream, TriangleStream, VertexStream};
use crate::vertex::{MeshVertex, Triangle};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    /// U texture coordinates.
    pub uv_u: Vec<f32>,
    /// V texture coordinates.
    pub uv_v: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,

    /// Per-triangle material assignment.
    pub material_ids: Vec<MaterialId>,
}

impl TriangleMesh {
    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            uv_u: Vec::with_capacity(vertex_capacity),
            uv_v: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            material_ids: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Drains `component`'s vertex and triangle streams into a new buffer.
    ///
    /// Fails if the vertex count does not fit `u32` indices, or if a
    /// triangle refers past the vertices the component produced.
    pub fn from_component<C>(component: &C) -> TesseraResult<Self>
    where
        C: MeshComponent + ?Sized,
    {
        let mut mesh = Self::default();

        let mut vertices = component.vertices();
        while !vertices.done() {
            mesh.push_vertex(vertices.generate());
            vertices.next();
        }

        let vertex_count = mesh.vertex_count();
        if u32::try_from(vertex_count).is_err() {
            return Err(TesseraError::IndexOverflow {
                vertex_count: vertex_count as u64,
            });
        }

        let mut triangles = component.triangles();
        while !triangles.done() {
            mesh.push_triangle(triangles.generate());
            triangles.next();
        }

        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns vertex `i` as a stream record.
    #[inline]
    pub fn vertex(&self, i: usize) -> MeshVertex {
        MeshVertex {
            position: Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i]),
            normal: Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i]),
            tex_coord: Vec2::new(self.uv_u[i], self.uv_v[i]),
        }
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns triangle `t` as a stream record, material included.
    #[inline]
    pub fn triangle_record(&self, t: usize) -> Triangle {
        Triangle {
            vertices: self.triangle(t),
            material: self.material_ids[t],
        }
    }

    /// Appends a vertex to every SoA channel.
    pub fn push_vertex(&mut self, vertex: MeshVertex) {
        self.pos_x.push(vertex.position.x);
        self.pos_y.push(vertex.position.y);
        self.pos_z.push(vertex.position.z);
        self.normal_x.push(vertex.normal.x);
        self.normal_y.push(vertex.normal.y);
        self.normal_z.push(vertex.normal.z);
        self.uv_u.push(vertex.tex_coord.x);
        self.uv_v.push(vertex.tex_coord.y);
    }

    /// Appends a triangle and its material.
    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.indices.extend_from_slice(&triangle.vertices);
        self.material_ids.push(triangle.material);
    }

    /// Validates buffer integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Index count is a multiple of 3 and matches the material count
    /// - Triangle indices are within bounds
    pub fn validate(&self) -> TesseraResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(TesseraError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(TesseraError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }
        if self.uv_u.len() != n || self.uv_v.len() != n {
            return Err(TesseraError::InvalidMesh(
                "UV arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(TesseraError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        let tri_count = self.triangle_count();
        if self.material_ids.len() != tri_count {
            return Err(TesseraError::InvalidMesh(format!(
                "Material IDs count ({}) != triangle count ({})",
                self.material_ids.len(),
                tri_count
            )));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(TesseraError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        Ok(())
    }
}

/// Vertex cursor over a borrowed [`TriangleMesh`].
pub struct MeshVertices<'a> {
    mesh: &'a TriangleMesh,
    cursor: usize,
}

impl MeshStream for MeshVertices<'_> {
    type Item = MeshVertex;

    fn generate(&self) -> MeshVertex {
        self.mesh.vertex(self.cursor)
    }

    fn done(&self) -> bool {
        self.cursor >= self.mesh.vertex_count()
    }

    fn next(&mut self) {
        self.cursor += 1;
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Triangle cursor over a borrowed [`TriangleMesh`].
pub struct MeshTriangles<'a> {
    mesh: &'a TriangleMesh,
    cursor: usize,
}

impl MeshStream for MeshTriangles<'_> {
    type Item = Triangle;

    fn generate(&self) -> Triangle {
        self.mesh.triangle_record(self.cursor)
    }

    fn done(&self) -> bool {
        self.cursor >= self.mesh.triangle_count()
    }

    fn next(&mut self) {
        self.cursor += 1;
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl VertexSource for TriangleMesh {
    fn vertices(&self) -> VertexStream<'_> {
        Box::new(MeshVertices {
            mesh: self,
            cursor: 0,
        })
    }
}

impl TriangleSource for TriangleMesh {
    fn triangles(&self) -> TriangleStream<'_> {
        Box::new(MeshTriangles {
            mesh: self,
            cursor: 0,
        })
    }
}
