//! A square pyramid with a textured base and four textured walls.

use super::{MeshData, SurfaceVertex};
use crate::geometry::quad::HALF_EXTENT;

/// Position of the apex above the centre of the base.
pub const APEX: [f32; 3] = [0.0, 0.0, 5.0];
const APEX_UV: [f32; 2] = [0.5, 0.5];

/// Builds the pyramid. The base lies in `z = 0`, the apex at [`APEX`].
///
/// Every wall maps the texture triangle spanned by its two base corners and
/// the centre of the image. With `show_front_wall == false` the wall on the
/// `y = -5` edge is left out so the inside can be seen.
pub fn pyramid(show_front_wall: bool) -> MeshData {
    let e = HALF_EXTENT;
    let corners = [
        ([-e, -e, 0.0], [0.0, 0.0]),
        ([e, -e, 0.0], [1.0, 0.0]),
        ([e, e, 0.0], [1.0, 1.0]),
        ([-e, e, 0.0], [0.0, 1.0]),
    ];

    let mut vertices: Vec<SurfaceVertex> = corners
        .iter()
        .map(|&(position, uv)| SurfaceVertex::new(position, uv))
        .collect();
    let mut indices = vec![0, 1, 2, 0, 2, 3];

    // Walls in order: front, right, top, left.
    for (wall, edge) in [(0, 1), (1, 2), (2, 3), (3, 0)].into_iter().enumerate() {
        if wall == 0 && !show_front_wall {
            continue;
        }
        let base = vertices.len() as u32;
        let (a, b) = (corners[edge.0], corners[edge.1]);
        vertices.push(SurfaceVertex::new(a.0, a.1));
        vertices.push(SurfaceVertex::new(b.0, b.1));
        vertices.push(SurfaceVertex::new(APEX, APEX_UV));
        indices.extend([base, base + 1, base + 2]);
    }

    MeshData::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn full_pyramid_has_six_triangles() {
        let mesh = pyramid(true);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.vertices.len(), 4 + 4 * 3);
    }

    #[test]
    fn hiding_front_wall_drops_one_triangle() {
        let mesh = pyramid(false);
        assert_eq!(mesh.triangle_count(), 5);
        // No remaining wall touches both front corners.
        let front_wall = mesh.triangles().skip(2).any(|tri| {
            tri.iter().filter(|v| v.position[1] == -HALF_EXTENT).count() == 2
        });
        assert!(!front_wall);
    }

    #[test]
    fn walls_face_outwards() {
        let mesh = pyramid(true);
        let centre = Vec3::new(0.0, 0.0, 1.0);
        for tri in mesh.triangles().skip(2) {
            let centroid = tri
                .iter()
                .map(|v| Vec3::from(v.position))
                .sum::<Vec3>()
                / 3.0;
            assert!(MeshData::face_normal(&tri).dot(centroid - centre) > 0.0);
        }
    }

    #[test]
    fn apex_samples_texture_centre() {
        let mesh = pyramid(true);
        for v in mesh.vertices.iter().filter(|v| v.position == APEX) {
            assert_eq!(v.uv, [0.5, 0.5]);
        }
    }
}
