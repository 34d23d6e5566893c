//! Face adjacency topology for exploded triangle meshes
//!
//! Built once per mesh from the exploded vertex positions:
//! 1. [`IndexedGeometry`] welds bit-identical positions back together
//! 2. [`corner_angles`] measures every triangle corner
//! 3. [`FaceGraph`] links each face to up to 3 edge neighbors
//!
//! Quad detection and loop walking query the finished topology; nothing
//! here changes until the mesh itself changes.

mod angles;
mod construction;
mod indexing;
mod loops;
mod quad;
mod types;
mod validation;

use std::time::Instant;

use glam::Vec3;
use tracing::{info, warn};

pub use angles::{angle_between, corner_angles};
pub use indexing::IndexedGeometry;
pub use types::{Edge, FaceLink, TopologyError, TopologyReport, triangle_side};

use crate::constants::MAX_FACE_LINKS;
use crate::types::FaceId;

/// Per-face edge neighbors
#[derive(Debug, Clone, Default)]
pub struct FaceGraph {
    /// Links of each face, in discovery order
    pub(crate) links: Vec<Vec<FaceLink>>,
    /// `[face][side]` -> index into `links[face]`
    pub(crate) sides: Vec<[Option<usize>; MAX_FACE_LINKS]>,
}

impl FaceGraph {
    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.links.len()
    }

    /// Links of a face (empty for unknown faces)
    pub fn links(&self, face: FaceId) -> &[FaceLink] {
        self.links
            .get(face.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The link occupying a given side (0..=2) of a face
    pub fn link_on_side(&self, face: FaceId, side: usize) -> Option<&FaceLink> {
        let idx = (*self.sides.get(face.index())?.get(side)?)?;
        self.links(face).get(idx)
    }

    /// The link from `from` to the adjacent face `to`
    pub fn find_link(&self, from: FaceId, to: FaceId) -> Option<&FaceLink> {
        self.links(from).iter().find(|link| link.with == to)
    }

    /// The reciprocal of a link owned by `face`
    pub fn back_link(&self, face: FaceId, link: &FaceLink) -> Option<&FaceLink> {
        self.links(link.with)
            .get(link.back_link)
            .filter(|back| back.with == face)
    }

    /// Total number of links (each shared edge counts twice)
    pub fn link_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }
}

/// Everything derived from mesh geometry that the paint tools query
#[derive(Debug, Clone, Default)]
pub struct MeshTopology {
    pub(crate) geometry: IndexedGeometry,
    pub(crate) angles: Vec<f32>,
    pub(crate) graph: FaceGraph,
    pub(crate) report: TopologyReport,
}

impl MeshTopology {
    /// Index, measure and link an exploded mesh
    pub fn build(positions: &[Vec3], triangles: &[u32]) -> Self {
        let start = Instant::now();
        let geometry = IndexedGeometry::from_exploded(positions, triangles);
        let indexify_elapsed = start.elapsed();

        let start = Instant::now();
        let angles = corner_angles(&geometry);
        let angles_elapsed = start.elapsed();

        let start = Instant::now();
        let (graph, report) = FaceGraph::build(&geometry);
        let graph_elapsed = start.elapsed();

        info!(
            "Topology: {} faces, {} welded vertices (from {}); indexify {:?}, angles {:?}, face graph {:?}",
            geometry.face_count(),
            geometry.vertex_count(),
            positions.len(),
            indexify_elapsed,
            angles_elapsed,
            graph_elapsed
        );

        if !report.is_clean() {
            warn!(
                "Funky mesh topology: {} overlapping face pairs, {} non-manifold links, {} orphaned links, {} degenerate faces",
                report.overlapping_faces,
                report.non_manifold_links,
                report.orphaned_links,
                report.degenerate_faces
            );
        }

        Self {
            geometry,
            angles,
            graph,
            report,
        }
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.geometry.face_count()
    }

    /// Welded geometry
    pub fn geometry(&self) -> &IndexedGeometry {
        &self.geometry
    }

    /// Face adjacency graph
    pub fn graph(&self) -> &FaceGraph {
        &self.graph
    }

    /// What the graph builder had to drop
    pub fn report(&self) -> &TopologyReport {
        &self.report
    }

    /// Angle (degrees) at a corner position of a face
    #[inline]
    pub fn angle(&self, face: FaceId, corner: usize) -> f32 {
        self.angles[face.first_corner() + corner]
    }

    /// All corner angles, 3 per face
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Average number of links per face
    pub fn average_links(&self) -> f32 {
        if self.face_count() == 0 {
            return 0.0;
        }
        self.graph.link_count() as f32 / self.face_count() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::SourceMesh;
    use crate::test_meshes::{quad_grid, single_triangle, square_tube};

    pub(crate) fn topology_of(mesh: &SourceMesh) -> MeshTopology {
        let exploded = mesh.explode().unwrap();
        MeshTopology::build(&exploded.positions, &exploded.triangles)
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for mesh in [quad_grid(3, 3), square_tube(), single_triangle()] {
            let topology = topology_of(&mesh);
            let graph = topology.graph();
            for f in 0..topology.face_count() {
                let face = FaceId::from(f);
                for link in graph.links(face) {
                    let back = graph.back_link(face, link).expect("reciprocal link");
                    assert_eq!(back.with, face);
                    assert!(back.edge.same_as(&link.edge));
                }
            }
            assert!(graph.validate().is_ok());
        }
    }

    #[test]
    fn test_link_cardinality() {
        let topology = topology_of(&quad_grid(4, 4));
        for f in 0..topology.face_count() {
            assert!(topology.graph().links(FaceId::from(f)).len() <= MAX_FACE_LINKS);
        }
        // Every interior face of a grid has all 3 neighbors
        let middle = FaceId(2 * (4 + 1));
        assert_eq!(topology.graph().links(middle).len(), 3);
    }

    #[test]
    fn test_isolated_triangle_has_no_links() {
        let topology = topology_of(&single_triangle());
        assert!(topology.graph().links(FaceId(0)).is_empty());
        assert!(topology.report().is_clean());
        assert_eq!(topology.average_links(), 0.0);
    }

    #[test]
    fn test_side_table_matches_links() {
        let topology = topology_of(&quad_grid(2, 2));
        let graph = topology.graph();
        for f in 0..topology.face_count() {
            let face = FaceId::from(f);
            for link in graph.links(face) {
                assert_eq!(graph.link_on_side(face, link.side), Some(link));
            }
        }
    }

    #[test]
    fn test_mismatched_inputs_do_not_panic() {
        let topology = MeshTopology::build(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ZERO], &[0, 1, 2]);
        assert_eq!(topology.face_count(), 1);
        assert!(topology.graph().links(FaceId(0)).is_empty());
        assert_eq!(topology.find_quad(FaceId(0), 120.0), None);

        let topology = MeshTopology::build(&[Vec3::ZERO, Vec3::X, Vec3::Y], &[0, 1, 3]);
        assert_eq!(topology.face_count(), 0);
        assert_eq!(topology.graph().face_count(), 0);
        assert!(topology.angles().is_empty());
    }

    #[test]
    fn test_unknown_face_queries_are_empty() {
        let topology = topology_of(&quad_grid(1, 1));
        assert!(topology.graph().links(FaceId(99)).is_empty());
        assert!(topology.graph().link_on_side(FaceId(99), 0).is_none());
        assert!(topology.graph().find_link(FaceId(0), FaceId(99)).is_none());
    }
}
