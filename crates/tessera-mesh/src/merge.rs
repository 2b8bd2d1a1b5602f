//! Concatenation of mesh components into one logical mesh.
//!
//! A [`MergeMesh`] owns an ordered list of components. Its vertex stream
//! relays every vertex of component 0, then component 1, and so on.
//! Its triangle stream does the same for triangles, re-basing each
//! component's indices by the number of vertices placed before it:
//!
//! ```text
//! component   vertices   offset
//! A           3          0
//! B           4          3
//! C           2          7
//! ```
//!
//! Nothing is buffered. Merges are themselves components, so they nest.

use tracing::debug;

use crate::component::{BoxedComponent, TriangleSource, VertexSource};
use crate::stream::{self, MeshStream, TriangleStream, VertexStream};
use crate::vertex::{MeshVertex, Triangle};

/// An ordered, immutable list of mesh components viewed as a single mesh.
#[derive(Default)]
pub struct MergeMesh {
    components: Vec<BoxedComponent>,
}

impl MergeMesh {
    /// Creates a merge of `components`, in the given order.
    pub fn new(components: Vec<BoxedComponent>) -> Self {
        Self { components }
    }

    /// Creates a merge with no components.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of merged components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns a fresh stream over the merged vertices.
    pub fn vertices(&self) -> MergeVertices<'_> {
        MergeVertices::new(self)
    }

    /// Returns a fresh stream over the merged, re-based triangles.
    ///
    /// Counts every component's vertices once, up front.
    pub fn triangles(&self) -> MergeTriangles<'_> {
        MergeTriangles::new(self)
    }
}

impl std::fmt::Debug for MergeMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeMesh")
            .field("components", &self.components.len())
            .finish()
    }
}

impl FromIterator<BoxedComponent> for MergeMesh {
    fn from_iter<I: IntoIterator<Item = BoxedComponent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl VertexSource for MergeMesh {
    fn vertices(&self) -> VertexStream<'_> {
        Box::new(MergeMesh::vertices(self))
    }
}

impl TriangleSource for MergeMesh {
    fn triangles(&self) -> TriangleStream<'_> {
        Box::new(MergeMesh::triangles(self))
    }
}

/// Merges `components` in iteration order.
pub fn merge_mesh<I>(components: I) -> MergeMesh
where
    I: IntoIterator<Item = BoxedComponent>,
{
    components.into_iter().collect()
}

/// Merges heterogeneous components taken by value.
///
/// ```
/// use tessera_mesh::generators::quad_grid;
/// use tessera_mesh::{merge_mesh, EmptyMesh, MeshStream};
///
/// let merged = merge_mesh![quad_grid(1, 1, 1.0, 1.0), EmptyMesh, quad_grid(2, 1, 1.0, 1.0)];
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged.vertices().into_elements().count(), 4 + 6);
/// ```
#[macro_export]
macro_rules! merge_mesh {
    () => {
        $crate::MergeMesh::empty()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::MergeMesh::new(::std::vec![
            $($crate::boxed($component)),+
        ])
    };
}

/// Vertex stream of a [`MergeMesh`].
///
/// `current` always points at the first sub-stream that is not done,
/// or one past the end once everything is drained.
pub struct MergeVertices<'a> {
    parts: Vec<VertexStream<'a>>,
    current: usize,
}

impl<'a> MergeVertices<'a> {
    fn new(mesh: &'a MergeMesh) -> Self {
        let parts = mesh.components.iter().map(|c| c.vertices()).collect();
        let mut stream = Self { parts, current: 0 };
        stream.skip_exhausted();
        stream
    }

    fn skip_exhausted(&mut self) {
        while self.current < self.parts.len() && self.parts[self.current].done() {
            self.current += 1;
        }
    }
}

impl MeshStream for MergeVertices<'_> {
    type Item = MeshVertex;

    fn generate(&self) -> MeshVertex {
        self.parts[self.current].generate()
    }

    fn done(&self) -> bool {
        self.current == self.parts.len()
    }

    fn next(&mut self) {
        self.parts[self.current].next();
        self.skip_exhausted();
    }

    fn reset(&mut self) {
        for part in &mut self.parts {
            part.reset();
        }
        self.current = 0;
        self.skip_exhausted();
    }
}

/// Triangle stream of a [`MergeMesh`].
///
/// `offsets[i]` is the number of vertices of all components before `i`.
/// Offsets are fixed at construction and survive `reset()`.
pub struct MergeTriangles<'a> {
    parts: Vec<TriangleStream<'a>>,
    offsets: Vec<u32>,
    vertex_count: usize,
    current: usize,
}

impl<'a> MergeTriangles<'a> {
    fn new(mesh: &'a MergeMesh) -> Self {
        let mut parts = Vec::with_capacity(mesh.components.len());
        let mut offsets = Vec::with_capacity(mesh.components.len());
        let mut vertex_count = 0usize;

        for component in &mesh.components {
            parts.push(component.triangles());
            // Indices are u32; a merge that outgrows them breaks the
            // component contract the same way an exhausted generate() does.
            let offset = u32::try_from(vertex_count).unwrap_or_else(|_| {
                panic!("merged vertex count {vertex_count} exceeds u32 index range")
            });
            offsets.push(offset);
            vertex_count += stream::count(component.vertices());
        }

        debug!(
            components = mesh.components.len(),
            vertex_count, "merged triangle stream ready"
        );

        let mut stream = Self {
            parts,
            offsets,
            vertex_count,
            current: 0,
        };
        stream.skip_exhausted();
        stream
    }

    /// Total vertex count of the merge, as measured at construction.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn skip_exhausted(&mut self) {
        while self.current < self.parts.len() && self.parts[self.current].done() {
            self.current += 1;
        }
    }
}

impl MeshStream for MergeTriangles<'_> {
    type Item = Triangle;

    fn generate(&self) -> Triangle {
        let triangle = self.parts[self.current].generate();
        match self.offsets[self.current] {
            0 => triangle,
            offset => triangle.shifted(offset),
        }
    }

    fn done(&self) -> bool {
        self.current == self.parts.len()
    }

    fn next(&mut self) {
        self.parts[self.current].next();
        self.skip_exhausted();
    }

    fn reset(&mut self) {
        for part in &mut self.parts {
            part.reset();
        }
        self.current = 0;
        self.skip_exhausted();
    }
}
