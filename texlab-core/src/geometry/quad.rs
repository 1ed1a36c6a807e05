//! A flat textured square built from two triangles.

use super::{MeshData, SurfaceVertex};

/// Half of the side length of the square.
pub const HALF_EXTENT: f32 = 5.0;

/// Returns a square of side 10 lying in the `z = 0` plane, facing +Z.
///
/// The texture covers the square exactly once, `(0, 0)` at the bottom left.
pub fn quad() -> MeshData {
    let e = HALF_EXTENT;
    let vertices = vec![
        // lower left half
        SurfaceVertex::new([-e, -e, 0.0], [0.0, 0.0]),
        SurfaceVertex::new([e, -e, 0.0], [1.0, 0.0]),
        SurfaceVertex::new([-e, e, 0.0], [0.0, 1.0]),
        // upper right half
        SurfaceVertex::new([e, -e, 0.0], [1.0, 0.0]),
        SurfaceVertex::new([e, e, 0.0], [1.0, 1.0]),
        SurfaceVertex::new([-e, e, 0.0], [0.0, 1.0]),
    ];
    let indices = (0..vertices.len() as u32).collect();
    MeshData::new(vertices, indices)
}
