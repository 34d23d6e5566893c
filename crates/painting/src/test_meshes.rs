//! Mesh and palette fixtures shared by unit tests.

use glam::{Vec2, Vec3};

use crate::mesh::SourceMesh;
use crate::palette::Palette;
use crate::types::Rgba8;

pub const RED: Rgba8 = [255, 0, 0, 255];
pub const GREEN: Rgba8 = [0, 255, 0, 255];
pub const BLUE: Rgba8 = [0, 0, 255, 255];
pub const WHITE: Rgba8 = [255, 255, 255, 255];

/// 4x1 palette: red, green, blue, white
pub fn stripes() -> Palette {
    Palette::new(4, 1, vec![RED, GREEN, BLUE, WHITE]).unwrap()
}

/// UV hitting stripe `i` of [`stripes`]
pub fn stripe_uv(i: u32) -> Vec2 {
    Vec2::new((i as f32 + 0.5) / 4.0, 0.5)
}

/// Flat grid of unit quads in the XY plane, each split along its
/// bottom-left to top-right diagonal.
///
/// Quad `(x, y)` is index `q = y * cols + x`; it owns faces `2q`
/// (bottom-right triangle) and `2q + 1` (top-left triangle).
pub fn quad_grid(cols: u32, rows: u32) -> SourceMesh {
    let mut positions = Vec::new();
    for y in 0..=rows {
        for x in 0..=cols {
            positions.push(Vec3::new(x as f32, y as f32, 0.0));
        }
    }

    let stride = cols + 1;
    let mut indices = Vec::new();
    for y in 0..rows {
        for x in 0..cols {
            let bl = y * stride + x;
            let br = bl + 1;
            let tl = bl + stride;
            let tr = tl + 1;
            indices.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
        }
    }

    SourceMesh {
        normals: vec![Vec3::Z; positions.len()],
        uvs: Vec::new(),
        positions,
        indices,
        bone_weights: None,
    }
}

/// Open square tube of 4 unit quads (a closed ring around the Z axis)
///
/// Side `i` owns faces `2i` (touching its right edge) and `2i + 1`
/// (touching its left edge), so face `2i` borders face `2(i+1) + 1`.
pub fn square_tube() -> SourceMesh {
    let corners = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let mut positions = Vec::new();
    for c in corners {
        positions.push(Vec3::new(c.x, c.y, 0.0));
        positions.push(Vec3::new(c.x, c.y, 1.0));
    }

    let mut indices = Vec::new();
    for i in 0..4u32 {
        let bl = 2 * i;
        let tl = bl + 1;
        let br = 2 * ((i + 1) % 4);
        let tr = br + 1;
        indices.extend_from_slice(&[bl, br, tr, bl, tr, tl]);
    }

    SourceMesh {
        normals: Vec::new(),
        uvs: Vec::new(),
        positions,
        indices,
        bone_weights: None,
    }
}

/// A lone triangle with no neighbors
pub fn single_triangle() -> SourceMesh {
    SourceMesh {
        positions: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        normals: Vec::new(),
        uvs: Vec::new(),
        indices: vec![0, 1, 2],
        bone_weights: None,
    }
}
