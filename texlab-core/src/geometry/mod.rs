//! Procedurally generated, textured triangle meshes.
//!
//! Every generator returns a [`MeshData`] ready to be uploaded as an indexed
//! triangle list. Winding is counter-clockwise for the outward face unless a
//! generator documents otherwise.

pub mod egg;
pub mod pyramid;
pub mod quad;

pub use egg::egg;
pub use pyramid::pyramid;
pub use quad::quad;

use glam::Vec3;

/// A vertex with an object-space position and a texture coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl SurfaceVertex {
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<SurfaceVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [SurfaceVertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Unnormalized face normal of a triangle following its winding order.
    pub fn face_normal(tri: &[SurfaceVertex; 3]) -> Vec3 {
        let a = Vec3::from(tri[0].position);
        let b = Vec3::from(tri[1].position);
        let c = Vec3::from(tri[2].position);
        (b - a).cross(c - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_normal_follows_winding() {
        let ccw = [
            SurfaceVertex::new([0.0, 0.0, 0.0], [0.0, 0.0]),
            SurfaceVertex::new([1.0, 0.0, 0.0], [1.0, 0.0]),
            SurfaceVertex::new([0.0, 1.0, 0.0], [0.0, 1.0]),
        ];
        assert!(MeshData::face_normal(&ccw).z > 0.0);

        let cw = [ccw[0], ccw[2], ccw[1]];
        assert!(MeshData::face_normal(&cw).z < 0.0);
    }
}
