//! Mesh input and the exploded (per-face vertex) representation
//!
//! Painting flat colors per face needs every triangle to own its three
//! vertices, so the source mesh is rebuilt once into an exploded layout
//! where vertex `3 * f + i` is corner `i` of face `f`. The source mesh is
//! kept untouched so a session can be abandoned.

use glam::{Vec2, Vec3};

use crate::error::PaintError;

/// Skinning weights for one vertex (up to 4 bones)
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct BoneWeight {
    pub indices: [u32; 4],
    pub weights: [f32; 4],
}

/// A triangle mesh as handed over by the scene layer (shared vertices allowed)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceMesh {
    pub positions: Vec<Vec3>,
    /// Empty means "not provided"
    pub normals: Vec<Vec3>,
    /// Channel 0 UVs; empty means "not provided"
    pub uvs: Vec<Vec2>,
    /// Triangle list, 3 indices per face
    pub indices: Vec<u32>,
    /// Present only for skinned meshes
    pub bone_weights: Option<Vec<BoneWeight>>,
}

/// Triangle list where every face owns 3 unique vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ExplodedMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    /// Always `0..3 * face_count`
    pub triangles: Vec<u32>,
    pub bone_weights: Option<Vec<BoneWeight>>,
}

impl SourceMesh {
    /// Number of triangles
    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check the index list and attribute lengths
    pub fn validate(&self) -> Result<(), PaintError> {
        if self.indices.len() % 3 != 0 {
            return Err(PaintError::IndexCount(self.indices.len()));
        }

        let vertex_count = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(PaintError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        check_len("normals", self.normals.len(), vertex_count, true)?;
        check_len("uvs", self.uvs.len(), vertex_count, true)?;
        if let Some(weights) = &self.bone_weights {
            check_len("bone_weights", weights.len(), vertex_count, false)?;
        }
        Ok(())
    }

    /// Rebuild into the exploded layout
    ///
    /// Each corner copies position, normal and bone weight from its source
    /// vertex. All three corners of a face take the UV of the face's first
    /// corner, so every face starts out a single flat color.
    pub fn explode(&self) -> Result<ExplodedMesh, PaintError> {
        self.validate()?;

        let corner_count = self.indices.len();
        let mut positions = Vec::with_capacity(corner_count);
        let mut normals = Vec::with_capacity(corner_count);
        let mut uvs = Vec::with_capacity(corner_count);
        let mut bone_weights = self
            .bone_weights
            .as_ref()
            .map(|_| Vec::with_capacity(corner_count));

        for (corner, &index) in self.indices.iter().enumerate() {
            let index = index as usize;
            positions.push(self.positions[index]);
            normals.push(self.normals.get(index).copied().unwrap_or(Vec3::Y));

            let first = self.indices[corner - corner % 3] as usize;
            uvs.push(self.uvs.get(first).copied().unwrap_or(Vec2::ZERO));

            if let (Some(out), Some(source)) = (bone_weights.as_mut(), self.bone_weights.as_ref()) {
                out.push(source[index]);
            }
        }

        Ok(ExplodedMesh {
            positions,
            normals,
            uvs,
            triangles: (0..corner_count as u32).collect(),
            bone_weights,
        })
    }
}

impl ExplodedMesh {
    /// Number of faces (`vertex_count / 3`)
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of exploded vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Convert back into a source mesh (e.g. to export the painted result)
    pub fn to_source_mesh(&self, uvs: &[Vec2]) -> SourceMesh {
        SourceMesh {
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            uvs: uvs.to_vec(),
            indices: self.triangles.clone(),
            bone_weights: self.bone_weights.clone(),
        }
    }
}

fn check_len(
    name: &'static str,
    len: usize,
    expected: usize,
    optional: bool,
) -> Result<(), PaintError> {
    if len == expected || (optional && len == 0) {
        Ok(())
    } else {
        Err(PaintError::AttributeLength {
            name,
            len,
            expected,
        })
    }
}
