//! Per-interaction state handed to a renderer
//!
//! The engine never draws. After an interaction the caller asks for a
//! [`PresentationState`] describing what to highlight and passes it on.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::PaintEngine;
use crate::types::{FaceId, Rgba8};

/// One highlighted triangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPoly {
    pub face: FaceId,
    pub corners: [Vec3; 3],
}

/// What the renderer should show for the current interaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationState {
    /// Faces under the tool, in tool order
    pub cursor: Vec<CursorPoly>,
    /// Palette color of the first face under the tool
    pub pixel_color: Option<Rgba8>,
}

impl PresentationState {
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }
}

impl PaintEngine {
    /// Cursor polygons for `faces` at their current (possibly moved)
    /// positions; unknown faces are skipped
    pub fn presentation(&self, faces: &[FaceId]) -> PresentationState {
        let positions = &self.mesh.positions;
        let cursor: Vec<CursorPoly> = faces
            .iter()
            .filter_map(|&face| {
                let start = face.first_corner();
                let corners = positions.get(start..start + 3)?;
                Some(CursorPoly {
                    face,
                    corners: [corners[0], corners[1], corners[2]],
                })
            })
            .collect();

        let pixel_color = cursor.first().and_then(|poly| self.face_color(poly.face));
        PresentationState {
            cursor,
            pixel_color,
        }
    }

    /// Highlight for the brush: the face and, with auto quads, its partner
    pub fn brush_presentation(&self, face: FaceId) -> PresentationState {
        let mut faces = vec![face];
        if self.config.auto_quads {
            faces.extend(self.find_quad(face));
        }
        self.presentation(&faces)
    }
}
