//! The mesh with no vertices and no triangles.

use std::marker::PhantomData;

use crate::component::{TriangleSource, VertexSource};
use crate::stream::{MeshStream, TriangleStream, VertexStream};
use crate::vertex::{MeshVertex, Triangle};

/// A component that contributes nothing to a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyMesh;

/// A stream that is exhausted from the start.
#[derive(Debug)]
pub struct EmptyStream<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for EmptyStream<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> MeshStream for EmptyStream<T> {
    type Item = T;

    fn generate(&self) -> T {
        panic!("generate() called on an empty stream");
    }

    fn done(&self) -> bool {
        true
    }

    fn next(&mut self) {
        panic!("next() called on an empty stream");
    }

    fn reset(&mut self) {}
}

impl VertexSource for EmptyMesh {
    fn vertices(&self) -> VertexStream<'_> {
        Box::new(EmptyStream::<MeshVertex>::default())
    }
}

impl TriangleSource for EmptyMesh {
    fn triangles(&self) -> TriangleStream<'_> {
        Box::new(EmptyStream::<Triangle>::default())
    }
}
