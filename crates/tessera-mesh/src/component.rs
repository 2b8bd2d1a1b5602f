//! The capability set every mesh component provides.
//!
//! A mesh component is anything that can hand out fresh, independent
//! vertex and triangle streams. Primitive buffers, procedural shapes,
//! and merged meshes all implement the same pair of traits, so they
//! can be stored side by side and nested freely.

use std::sync::Arc;

use crate::stream::{TriangleStream, VertexStream};

/// Source of vertex streams.
pub trait VertexSource {
    /// Returns a fresh vertex stream positioned at the first vertex.
    ///
    /// Must be deterministic: every stream returned for the same
    /// component yields the same number of vertices.
    fn vertices(&self) -> VertexStream<'_>;
}

/// Source of triangle streams.
pub trait TriangleSource {
    /// Returns a fresh triangle stream positioned at the first triangle.
    ///
    /// Indices refer to this component's own vertex stream.
    fn triangles(&self) -> TriangleStream<'_>;
}

/// A value offering both vertex and triangle streams.
///
/// Implemented automatically for every `VertexSource + TriangleSource`.
pub trait MeshComponent: VertexSource + TriangleSource {}

impl<T: VertexSource + TriangleSource + ?Sized> MeshComponent for T {}

/// Owned, type-erased component as stored inside a merge.
pub type BoxedComponent = Box<dyn MeshComponent + Send + Sync>;

/// Boxes a component for storage in a [`MergeMesh`](crate::MergeMesh).
pub fn boxed<C>(component: C) -> BoxedComponent
where
    C: MeshComponent + Send + Sync + 'static,
{
    Box::new(component)
}

impl<T: VertexSource + ?Sized> VertexSource for Box<T> {
    fn vertices(&self) -> VertexStream<'_> {
        (**self).vertices()
    }
}

impl<T: TriangleSource + ?Sized> TriangleSource for Box<T> {
    fn triangles(&self) -> TriangleStream<'_> {
        (**self).triangles()
    }
}

impl<T: VertexSource + ?Sized> VertexSource for Arc<T> {
    fn vertices(&self) -> VertexStream<'_> {
        (**self).vertices()
    }
}

impl<T: TriangleSource + ?Sized> TriangleSource for Arc<T> {
    fn triangles(&self) -> TriangleStream<'_> {
        (**self).triangles()
    }
}

impl<T: VertexSource + ?Sized> VertexSource for &T {
    fn vertices(&self) -> VertexStream<'_> {
        (**self).vertices()
    }
}

impl<T: TriangleSource + ?Sized> TriangleSource for &T {
    fn triangles(&self) -> TriangleStream<'_> {
        (**self).triangles()
    }
}
