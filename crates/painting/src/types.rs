use serde::{Deserialize, Serialize};

/// An RGBA8 color as stored in a palette texture.
pub type Rgba8 = [u8; 4];

/// Type-safe face identifier (index of a triangle in the exploded mesh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FaceId(pub u32);

impl FaceId {
    /// Index into per-face arrays
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Index of this face's first corner in per-corner arrays
    #[inline]
    pub fn first_corner(self) -> usize {
        self.index() * 3
    }
}

/// Meshes are limited to `u32::MAX` faces; larger indices are a caller bug
/// and panic in debug builds.
impl From<usize> for FaceId {
    fn from(index: usize) -> Self {
        debug_assert!(
            u32::try_from(index).is_ok(),
            "face index {index} does not fit in a FaceId"
        );
        FaceId(index as u32)
    }
}

/// What [`crate::PaintEngine::set`] does with the face it is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ToolAction {
    /// Write the UV to the face
    #[default]
    Paint = 0,
    /// Add the face to the selection
    Select = 1,
    /// Remove the face from the selection
    Deselect = 2,
}

/// Flavor of the fill tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum FillVariant {
    /// Spread across neighbors sharing the seed's color
    #[default]
    Flood = 0,
    /// Repaint every face in the mesh with the seed's color
    Replace = 1,
    /// Spread across the whole connected element
    Element = 2,
    /// Repaint the entire mesh
    All = 3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_id_from_index() {
        let face = FaceId::from(7usize);
        assert_eq!(face, FaceId(7));
        assert_eq!(face.index(), 7);
        assert_eq!(face.first_corner(), 21);
        assert_eq!(FaceId::from(u32::MAX as usize), FaceId(u32::MAX));
    }

    #[cfg(all(debug_assertions, target_pointer_width = "64"))]
    #[test]
    #[should_panic(expected = "does not fit in a FaceId")]
    fn test_face_id_rejects_oversized_index() {
        let _ = FaceId::from(u32::MAX as usize + 1);
    }
}
