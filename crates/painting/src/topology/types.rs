//! Type definitions for the face adjacency graph.

use serde::{Deserialize, Serialize};

use crate::types::FaceId;

/// An edge between two indexed (welded) vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub v1: u32,
    pub v2: u32,
}

impl Edge {
    pub fn new(v1: u32, v2: u32) -> Self {
        Self { v1, v2 }
    }

    /// Same two vertices, in either order
    pub fn same_as(&self, other: &Edge) -> bool {
        (self.v1 == other.v1 && self.v2 == other.v2) || (self.v1 == other.v2 && self.v2 == other.v1)
    }

    /// True if the edges touch in at least one vertex
    pub fn shares_vertex(&self, other: &Edge) -> bool {
        self.v1 == other.v1 || self.v1 == other.v2 || self.v2 == other.v1 || self.v2 == other.v2
    }
}

/// A shared-edge relationship from one face to a neighbor
///
/// Corner positions (`corners`, `opposite`) are 0..=2 within the owning
/// face; `edge` holds the indexed vertex ids of the shared edge in the
/// order of `corners`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceLink {
    /// The neighboring face
    pub with: FaceId,
    /// The two shared corner positions on the owning face
    pub corners: [usize; 2],
    /// The shared edge as indexed vertex ids
    pub edge: Edge,
    /// Triangle side (0, 1 or 2) this edge occupies on the owning face
    pub side: usize,
    /// The corner position left out of the shared edge
    pub opposite: usize,
    /// Position of the reciprocal link in the neighbor's link list
    pub back_link: usize,
}

/// Side number of the triangle edge between corner positions `p1` and `p2`
///
/// Side 0 joins corners 0-1, side 1 joins 1-2, side 2 joins 2-0.
pub fn triangle_side(p1: usize, p2: usize) -> usize {
    let low = p1.min(p2);
    let high = p1.max(p2);
    if low == 0 && high == 2 { 2 } else { low }
}

/// Malformed topology found while building the face graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyReport {
    /// Face pairs sharing all three vertices
    pub overlapping_faces: usize,
    /// Candidate links dropped because a side was already taken
    pub non_manifold_links: usize,
    /// Links dropped because the neighbor had no link back
    pub orphaned_links: usize,
    /// Faces with a repeated vertex, left unlinked
    pub degenerate_faces: usize,
    /// Total links kept
    pub link_count: usize,
}

impl TopologyReport {
    /// True if nothing had to be dropped
    pub fn is_clean(&self) -> bool {
        self.overlapping_faces == 0
            && self.non_manifold_links == 0
            && self.orphaned_links == 0
            && self.degenerate_faces == 0
    }
}

/// Consistency violations reported by `FaceGraph::validate`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("Face {face:?} has {count} links")]
    TooManyLinks { face: FaceId, count: usize },
    #[error("Face {0:?} links to itself")]
    SelfLink(FaceId),
    #[error("Face {face:?} links to missing face {with:?}")]
    MissingFace { face: FaceId, with: FaceId },
    #[error("Link {face:?} -> {with:?} has no reciprocal")]
    Asymmetric { face: FaceId, with: FaceId },
    #[error("Link {face:?} -> {with:?} has back link {back_link} pointing elsewhere")]
    BadBackLink {
        face: FaceId,
        with: FaceId,
        back_link: usize,
    },
    #[error("Face {face:?} has two links on side {side}")]
    SideTaken { face: FaceId, side: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_side() {
        assert_eq!(triangle_side(0, 1), 0);
        assert_eq!(triangle_side(1, 0), 0);
        assert_eq!(triangle_side(1, 2), 1);
        assert_eq!(triangle_side(2, 1), 1);
        assert_eq!(triangle_side(0, 2), 2);
        assert_eq!(triangle_side(2, 0), 2);
    }

    #[test]
    fn test_edge_relations() {
        let a = Edge::new(1, 2);
        assert!(a.same_as(&Edge::new(2, 1)));
        assert!(!a.same_as(&Edge::new(2, 3)));
        assert!(a.shares_vertex(&Edge::new(2, 3)));
        assert!(!a.shares_vertex(&Edge::new(3, 4)));
    }
}
