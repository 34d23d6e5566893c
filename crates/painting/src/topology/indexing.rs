//! Recover shared-vertex topology from an exploded triangle list.
//!
//! Vertices are merged only when their positions are bit-identical (with
//! -0.0 folded into +0.0). Positions that differ by floating-point noise
//! stay separate vertices; this decides which faces count as neighbors, so
//! there is intentionally no tolerance.

use std::collections::HashMap;

use glam::Vec3;
use tracing::warn;

use crate::types::FaceId;

/// Welded view of an exploded mesh, used only for topology analysis
#[derive(Debug, Clone, Default)]
pub struct IndexedGeometry {
    /// Unique positions
    pub(crate) verts: Vec<Vec3>,
    /// Per-corner index into `verts` (same length and order as the exploded triangles)
    pub(crate) corners: Vec<u32>,
    /// For each unique vertex, the faces using it (ascending, no duplicates)
    pub(crate) faces_using_vert: Vec<Vec<FaceId>>,
}

/// Hash key for exact position equality
fn position_key(p: Vec3) -> [u32; 3] {
    // -0.0 == 0.0 as floats, so they must merge too
    let bits = |v: f32| if v == 0.0 { 0 } else { v.to_bits() };
    [bits(p.x), bits(p.y), bits(p.z)]
}

impl IndexedGeometry {
    /// Index an exploded mesh
    ///
    /// Faces come from `triangles`, three corners each; for an exploded
    /// mesh it is the identity `i -> i` into `positions`. A triangle list
    /// that is not a whole number of faces or points past `positions`
    /// yields an empty geometry.
    pub fn from_exploded(positions: &[Vec3], triangles: &[u32]) -> Self {
        if triangles.len() % 3 != 0 {
            warn!(
                "Triangle list of {} indices is not whole faces, skipping topology",
                triangles.len()
            );
            return Self::default();
        }
        if let Some(&bad) = triangles.iter().find(|&&t| t as usize >= positions.len()) {
            warn!(
                "Triangle index {} out of range ({} positions), skipping topology",
                bad,
                positions.len()
            );
            return Self::default();
        }

        let mut verts: Vec<Vec3> = Vec::new();
        let mut lookup: HashMap<[u32; 3], u32> = HashMap::with_capacity(triangles.len() / 2);
        let mut faces_using_vert: Vec<Vec<FaceId>> = Vec::new();
        let mut corners: Vec<u32> = Vec::with_capacity(triangles.len());

        for (corner, &t) in triangles.iter().enumerate() {
            let face = FaceId::from(corner / 3);
            let p = positions[t as usize];
            let idx = *lookup.entry(position_key(p)).or_insert_with(|| {
                verts.push(p);
                faces_using_vert.push(Vec::new());
                (verts.len() - 1) as u32
            });
            corners.push(idx);

            let faces = &mut faces_using_vert[idx as usize];
            if faces.last() != Some(&face) {
                faces.push(face);
            }
        }

        Self {
            verts,
            corners,
            faces_using_vert,
        }
    }

    /// Number of unique vertices
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.corners.len() / 3
    }

    /// Unique positions
    pub fn vertices(&self) -> &[Vec3] {
        &self.verts
    }

    /// Per-corner indexed vertex ids
    pub fn corners(&self) -> &[u32] {
        &self.corners
    }

    /// The three indexed vertex ids of a face
    #[inline]
    pub fn face_verts(&self, face: FaceId) -> [u32; 3] {
        let start = face.first_corner();
        [
            self.corners[start],
            self.corners[start + 1],
            self.corners[start + 2],
        ]
    }

    /// Indexed vertex id at a corner position (0..=2) of a face
    #[inline]
    pub fn corner(&self, face: FaceId, position: usize) -> u32 {
        self.corners[face.first_corner() + position]
    }

    /// Faces using a given indexed vertex
    pub fn faces_using_vert(&self, vert: u32) -> &[FaceId] {
        self.faces_using_vert
            .get(vert as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every face sharing at least one vertex with `face` (itself included),
    /// sorted ascending
    pub fn faces_around(&self, face: FaceId) -> Vec<FaceId> {
        let mut result: Vec<FaceId> = self
            .face_verts(face)
            .iter()
            .flat_map(|&v| self.faces_using_vert(v).iter().copied())
            .collect();
        result.sort_unstable();
        result.dedup();
        result
    }
}
