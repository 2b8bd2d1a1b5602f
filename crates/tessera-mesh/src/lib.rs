//! # tessera-mesh
//!
//! Lazy mesh streams and the merge operator that stitches them together.
//!
//! ## Key Types
//!
//! - [`MeshStream`] — the restartable cursor protocol every vertex and
//!   triangle stream implements.
//! - [`VertexSource`] / [`TriangleSource`] — the capability pair a mesh
//!   component offers; [`MeshComponent`] is both.
//! - [`MergeMesh`] — N components concatenated into one mesh, with
//!   triangle indices re-based on the fly.
//! - [`TriangleMesh`] — a buffered SoA mesh, usable as a component and as
//!   the target for materialising streams.
//! - Procedural sources (quad grids, UV spheres).

pub mod component;
pub mod empty;
pub mod generators;
pub mod merge;
pub mod mesh;
pub mod stream;
pub mod vertex;

pub use component::{boxed, BoxedComponent, MeshComponent, TriangleSource, VertexSource};
pub use empty::{EmptyMesh, EmptyStream};
pub use merge::{merge_mesh, MergeMesh, MergeTriangles, MergeVertices};
pub use mesh::TriangleMesh;
pub use stream::{count, MeshStream, StreamIter, TriangleStream, VertexStream};
pub use vertex::{MeshVertex, Triangle};
