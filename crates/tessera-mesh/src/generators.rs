//! Procedural mesh sources.
//!
//! These produce deterministic, resolution-configurable buffered meshes
//! with correct winding order and UV coordinates. They are ordinary
//! components and can be fed straight into a merge.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::mesh::TriangleMesh;
use crate::vertex::{MeshVertex, Triangle};

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0, facing +Z.
///
/// # Example
/// ```
/// use tessera_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.push_vertex(MeshVertex::new(
                Vec3::new(-half_w + u * width, half_h - v * height, 0.0),
                Vec3::Z,
                Vec2::new(u, v),
            ));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle(Triangle::new([top_left, bot_left, top_right]));
            mesh.push_triangle(Triangle::new([top_right, bot_left, bot_right]));
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// `stacks` are latitude divisions, `slices` longitude divisions.
/// The pole rows emit one triangle per slice instead of two.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * (slices + 1), stacks * slices * 2);

    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        for j in 0..=slices {
            let theta = 2.0 * PI * j as f32 / slices as f32;
            let normal = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            mesh.push_vertex(MeshVertex::new(
                normal * radius,
                normal,
                Vec2::new(j as f32 / slices as f32, i as f32 / stacks as f32),
            ));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle(Triangle::new([a, b, a + 1]));
            }
            if i != stacks - 1 {
                mesh.push_triangle(Triangle::new([a + 1, b, b + 1]));
            }
        }
    }

    mesh
}
