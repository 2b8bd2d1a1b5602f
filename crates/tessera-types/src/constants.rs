//! Defaults for the procedural sources.

/// Default quad count along each axis of a grid.
pub const DEFAULT_GRID_RESOLUTION: usize = 8;

/// Default edge length of a grid (meters).
pub const DEFAULT_GRID_SIZE: f32 = 1.0;

/// Default sphere radius (meters).
pub const DEFAULT_SPHERE_RADIUS: f32 = 0.5;

/// Default latitude divisions of a UV sphere.
pub const DEFAULT_SPHERE_STACKS: usize = 8;

/// Default longitude divisions of a UV sphere.
pub const DEFAULT_SPHERE_SLICES: usize = 16;
