//! Parametric egg surface.
//!
//! The surface is swept over `(u, v) ∈ [0, 1]²`. The profile polynomial
//! `p(u)` is zero at both poles and at `u = 0.5` (the top), and it changes sign
//! on the way back down, so the second half of the grid is mirrored through
//! the Y axis. Triangles emitted for that half get their winding reversed, so
//! the outer shell winds counter-clockwise seen from outside on both halves.
//! The one row of cells that wraps over the top (`u` spanning 0.5) gets a
//! mix of both orders.

use std::f32::consts::PI;

use super::{MeshData, SurfaceVertex};
use crate::{Error, Result};

/// Grid resolution used when nothing else is configured.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Largest accepted grid resolution (about a million vertices).
pub const MAX_RESOLUTION: usize = 1024;

/// Vertical offset that centres the egg around the origin.
const Y_OFFSET: f32 = 5.0;

/// Radial profile of the egg.
#[inline]
pub fn profile(u: f32) -> f32 {
    let u2 = u * u;
    let u3 = u2 * u;
    let u4 = u3 * u;
    let u5 = u4 * u;
    -90.0 * u5 + 225.0 * u4 - 270.0 * u3 + 180.0 * u2 - 45.0 * u
}

/// Height of the egg at parameter `u`.
#[inline]
pub fn height(u: f32) -> f32 {
    let u2 = u * u;
    let u3 = u2 * u;
    let u4 = u3 * u;
    160.0 * u4 - 320.0 * u3 + 160.0 * u2 - Y_OFFSET
}

/// Point on the surface for parameters `(u, v)`.
pub fn point(u: f32, v: f32) -> [f32; 3] {
    let r = profile(u);
    let angle = PI * v;
    [r * angle.cos(), height(u), r * angle.sin()]
}

/// Tessellates the egg on an `n × n` grid.
///
/// Vertex `(i, j)` lives at index `i * n + j` and maps the texture with
/// `uv = (u_i, v_j)`. Cells in the first half (`i < n / 2`) are emitted as
/// `(p1, p2, p3), (p2, p4, p3)`, the rest as `(p1, p3, p2), (p2, p3, p4)`.
pub fn egg(n: usize) -> Result<MeshData> {
    if n < 2 {
        return Err(Error::Config(format!(
            "egg resolution must be at least 2, got {n}"
        )));
    }
    if n > MAX_RESOLUTION {
        return Err(Error::Config(format!(
            "egg resolution must be at most {MAX_RESOLUTION}, got {n}"
        )));
    }

    let step = 1.0 / (n - 1) as f32;
    let mut vertices = Vec::with_capacity(n * n);
    for i in 0..n {
        let u = i as f32 * step;
        for j in 0..n {
            let v = j as f32 * step;
            vertices.push(SurfaceVertex::new(point(u, v), [u, v]));
        }
    }

    let at = |i: usize, j: usize| (i * n + j) as u32;
    let half = n as f32 / 2.0;
    let mut indices = Vec::with_capacity(6 * (n - 1) * (n - 1));
    for i in 0..n - 1 {
        let flipped = i as f32 >= half;
        for j in 0..n - 1 {
            let (p1, p2, p3, p4) = (at(i, j), at(i + 1, j), at(i, j + 1), at(i + 1, j + 1));
            if flipped {
                indices.extend([p1, p3, p2, p2, p3, p4]);
            } else {
                indices.extend([p1, p2, p3, p2, p4, p3]);
            }
        }
    }

    log::debug!(
        "Tessellated egg: {} vertices, {} triangles",
        vertices.len(),
        indices.len() / 3
    );

    Ok(MeshData::new(vertices, indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn poles_and_top() {
        assert_eq!(point(0.0, 0.3), [0.0, -5.0, 0.0]);
        let bottom = point(1.0, 0.7);
        assert!(close(bottom[0], 0.0) && close(bottom[1], -5.0) && close(bottom[2], 0.0));
        let top = point(0.5, 0.0);
        assert!(close(top[0], 0.0) && close(top[1], 5.0) && close(top[2], 0.0));
    }

    #[test]
    fn profile_changes_sign_past_the_top() {
        assert!(profile(0.25) < 0.0);
        assert!(profile(0.75) > 0.0);
        assert!(close(profile(0.25), -profile(0.75)));
    }

    #[test]
    fn counts_and_bounds() {
        let n = DEFAULT_RESOLUTION;
        let mesh = egg(n).unwrap();
        assert_eq!(mesh.vertices.len(), n * n);
        assert_eq!(mesh.indices.len(), 6 * (n - 1) * (n - 1));
        assert!(mesh.indices.iter().all(|&i| (i as usize) < n * n));
    }

    #[test]
    fn uv_matches_grid_parameters() {
        let n = 5;
        let mesh = egg(n).unwrap();
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices[n * n - 1].uv, [1.0, 1.0]);
        assert_eq!(mesh.vertices[2 * n + 1].uv, [0.5, 0.25]);
    }

    #[test]
    fn winding_flips_on_second_half() {
        let n = 4;
        let mesh = egg(n).unwrap();
        let cells_per_row = 6 * (n - 1);
        // i = 0 < n / 2
        assert_eq!(&mesh.indices[..6], &[0, 4, 1, 4, 5, 1]);
        // i = 2 >= n / 2
        let row = &mesh.indices[2 * cells_per_row..2 * cells_per_row + 6];
        assert_eq!(row, &[8, 9, 12, 12, 9, 13]);
    }

    #[test]
    fn odd_resolution_splits_on_real_half() {
        // n = 5: n / 2 = 2.5, so rows 0..=2 keep their winding and row 3 flips.
        let n = 5;
        let mesh = egg(n).unwrap();
        let row = |i: usize| &mesh.indices[i * 6 * (n - 1)..i * 6 * (n - 1) + 6];
        let (i, j) = (2u32, 0u32);
        let p1 = i * n as u32 + j;
        assert_eq!(row(2), &[p1, p1 + 5, p1 + 1, p1 + 5, p1 + 6, p1 + 1]);
        let p1 = 3 * n as u32;
        assert_eq!(row(3), &[p1, p1 + 1, p1 + 5, p1 + 5, p1 + 1, p1 + 6]);
    }

    #[test]
    fn outer_shell_winds_counter_clockwise() {
        for n in [4, DEFAULT_RESOLUTION] {
            let mesh = egg(n).unwrap();
            let mut checked = 0;
            for tri in mesh.triangles() {
                let normal = MeshData::face_normal(&tri);
                // Pole fans collapse to (near) zero area.
                if normal.length() < 1e-4 {
                    continue;
                }
                // Cells wrapping over the top mix both winding orders.
                let us = tri.map(|v| v.uv[0]);
                if us.iter().any(|&u| u < 0.5) && us.iter().any(|&u| u > 0.5) {
                    continue;
                }
                let centroid = tri
                    .iter()
                    .map(|v| glam::Vec3::from(v.position))
                    .sum::<glam::Vec3>()
                    / 3.0;
                assert!(normal.dot(centroid) > 0.0, "n={n}: inward triangle {tri:?}");
                checked += 1;
            }
            // Both halves are covered, minus the pole fans and the top row.
            assert_eq!(checked, 2 * (n - 1) * (n - 1) - 2 * (n - 1) - 2 * (n - 1));
        }
    }

    #[test]
    fn rejects_degenerate_resolution() {
        assert!(matches!(egg(1), Err(Error::Config(_))));
        assert!(matches!(egg(0), Err(Error::Config(_))));
    }

    #[test]
    fn rejects_oversized_resolution() {
        assert!(matches!(egg(MAX_RESOLUTION + 1), Err(Error::Config(_))));
        assert!(matches!(egg(60_000), Err(Error::Config(_))));
    }
}
