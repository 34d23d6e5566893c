//! Quad detection: which neighbor completes a face into a quad.
//!
//! A quad split along its diagonal leaves two triangles whose corners away
//! from the diagonal are ~90° each, and whose angles at the two diagonal
//! ends add up to ~90°. The summed deviation from those targets scores how
//! quad-like a pair is.

use tracing::warn;

use super::types::FaceLink;
use super::MeshTopology;
use crate::constants::QUAD_CORNER_ANGLE;
use crate::types::FaceId;

impl MeshTopology {
    /// Quad "badness" of `face` paired with the neighbor behind `link`
    ///
    /// Sum of `|90 - angle|` over: the two corners off the shared edge, and
    /// the two shared corners (angles of both faces at the same vertex added
    /// together). None if the link's back reference is broken.
    pub fn quad_score(&self, face: FaceId, link: &FaceLink) -> Option<f32> {
        let other = link.with;
        let Some(back) = self.graph.back_link(face, link) else {
            warn!("Bad back link from {:?} to {:?}", face, other);
            return None;
        };

        // Pair the shared corners by vertex, not by position in the link
        let (other_first, other_second) = if back.edge.v1 == link.edge.v1 {
            (back.corners[0], back.corners[1])
        } else {
            (back.corners[1], back.corners[0])
        };

        let angles = [
            self.angle(face, link.opposite),
            self.angle(other, back.opposite),
            self.angle(face, link.corners[0]) + self.angle(other, other_first),
            self.angle(face, link.corners[1]) + self.angle(other, other_second),
        ];

        Some(angles.iter().map(|a| (QUAD_CORNER_ANGLE - a).abs()).sum())
    }

    /// The neighbor that best completes `face` into a quad
    ///
    /// Only scores strictly below `tolerance` qualify; on equal scores the
    /// first link wins. None for isolated or unknown faces.
    pub fn find_quad(&self, face: FaceId, tolerance: f32) -> Option<FaceId> {
        let mut best = None;
        let mut best_score = tolerance;

        for link in self.graph.links(face) {
            if let Some(score) = self.quad_score(face, link) {
                if score < best_score {
                    best = Some(link.with);
                    best_score = score;
                }
            }
        }

        best
    }
}
