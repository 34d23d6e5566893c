//! Per-corner UV storage for flat-colored faces
//!
//! Every face owns three UV slots that always hold the same value, so a
//! face's color is defined by a single point on the palette.

use glam::Vec2;

use crate::types::FaceId;

/// UV pairs for every exploded vertex (3 per face)
#[derive(Debug, Clone, PartialEq)]
pub struct UvBuffer {
    uvs: Vec<Vec2>,
}

impl UvBuffer {
    /// Wrap per-corner UVs; the length must be a multiple of 3
    pub(crate) fn from_corners(uvs: Vec<Vec2>) -> Self {
        debug_assert_eq!(uvs.len() % 3, 0);
        Self { uvs }
    }

    /// Number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.uvs.len() / 3
    }

    /// True if the face id addresses a face in this buffer
    #[inline]
    pub fn contains(&self, face: FaceId) -> bool {
        face.index() < self.face_count()
    }

    /// UV of a face (all three corners share it)
    #[inline]
    pub fn get(&self, face: FaceId) -> Option<Vec2> {
        self.uvs.get(face.first_corner()).copied()
    }

    /// Write the UV triple of a face
    /// Returns false if the face is out of range
    #[inline]
    pub fn set(&mut self, face: FaceId, uv: Vec2) -> bool {
        if !self.contains(face) {
            return false;
        }
        let start = face.first_corner();
        self.uvs[start..start + 3].fill(uv);
        true
    }

    /// Set every corner to the same UV
    pub fn fill(&mut self, uv: Vec2) {
        self.uvs.fill(uv);
    }

    /// Overwrite the whole buffer from a snapshot of the same size
    pub(crate) fn restore(&mut self, snapshot: &[Vec2]) {
        self.uvs.copy_from_slice(snapshot);
    }

    /// Per-corner UVs, ready for a renderer
    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Raw bytes for vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_writes_all_corners() {
        let mut buffer = UvBuffer::from_corners(vec![Vec2::ZERO; 6]);
        assert!(buffer.set(FaceId(1), Vec2::new(0.5, 0.25)));

        assert_eq!(buffer.as_slice()[..3], [Vec2::ZERO; 3]);
        assert_eq!(buffer.as_slice()[3..], [Vec2::new(0.5, 0.25); 3]);
        assert_eq!(buffer.get(FaceId(1)), Some(Vec2::new(0.5, 0.25)));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut buffer = UvBuffer::from_corners(vec![Vec2::ZERO; 3]);
        assert!(!buffer.set(FaceId(1), Vec2::ONE));
        assert_eq!(buffer.get(FaceId(1)), None);
        assert_eq!(buffer.as_slice(), &[Vec2::ZERO; 3]);
    }

    #[test]
    fn test_as_bytes() {
        let buffer = UvBuffer::from_corners(vec![Vec2::ZERO; 3]);
        // 3 corners * 2 components * 4 bytes
        assert_eq!(buffer.as_bytes().len(), 24);
    }
}
