//! Interior corner angles of every triangle.

use glam::Vec3;

use super::indexing::IndexedGeometry;
use crate::constants::MIN_ANGLE_DENOMINATOR;

/// Angle in degrees between two vectors (0 when either is degenerate)
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator < MIN_ANGLE_DENOMINATOR {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}

/// One angle per (face, corner), laid out like the corner array
pub fn corner_angles(geometry: &IndexedGeometry) -> Vec<f32> {
    let verts = geometry.vertices();
    let corners = geometry.corners();
    let mut angles = Vec::with_capacity(corners.len());

    for tri in corners.chunks_exact(3) {
        for i in 0..3 {
            let here = verts[tri[i] as usize];
            let next = verts[tri[(i + 1) % 3] as usize];
            let prev = verts[tri[(i + 2) % 3] as usize];
            angles.push(angle_between(next - here, prev - here));
        }
    }

    angles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_meshes::{quad_grid, single_triangle};

    fn angles_of(mesh: &crate::mesh::SourceMesh) -> Vec<f32> {
        let exploded = mesh.explode().unwrap();
        corner_angles(&IndexedGeometry::from_exploded(
            &exploded.positions,
            &exploded.triangles,
        ))
    }

    #[test]
    fn test_right_triangle() {
        let angles = angles_of(&single_triangle());
        assert_eq!(angles.len(), 3);
        assert!((angles[0] - 90.0).abs() < 1e-4);
        assert!((angles[1] - 45.0).abs() < 1e-4);
        assert!((angles[2] - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_angles_sum_to_180() {
        for tri in angles_of(&quad_grid(2, 2)).chunks(3) {
            let sum: f32 = tri.iter().sum();
            assert!((sum - 180.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_degenerate_edge_is_zero() {
        assert_eq!(angle_between(Vec3::ZERO, Vec3::X), 0.0);
        assert!((angle_between(Vec3::X, -Vec3::X) - 180.0).abs() < 1e-4);
    }
}
