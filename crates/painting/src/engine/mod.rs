//! Paint engine: per-face UV painting over an exploded mesh
//!
//! The engine owns everything a paint session mutates:
//! - the UV buffer (one flat color per face)
//! - the face selection and the active tool action
//! - the undo history of UV snapshots
//! - a backup of vertex positions while faces are visually pulled apart
//!
//! Topology is derived once in [`PaintEngine::rebuild`] and stays
//! read-only until a new mesh is set. The only way to get an engine is to
//! rebuild one from a mesh, and [`PaintEngine::restore_old_mesh`] consumes
//! it, so no operation can run without a mesh.

mod fill;
mod presentation;
mod remap;
mod selection;
mod undo;

use std::collections::BTreeSet;
use std::time::Instant;

use glam::{Vec2, Vec3};
use polypaint_config::PaintConfig;
use tracing::info;

use crate::constants::NEUTRAL_COLOR;
use crate::error::PaintError;
use crate::history::UndoHistory;
use crate::mesh::{ExplodedMesh, SourceMesh};
use crate::palette::Palette;
use crate::topology::{FaceLink, MeshTopology, TopologyReport};
use crate::types::{FaceId, Rgba8, ToolAction};
use crate::uv_buffer::UvBuffer;

pub use presentation::{CursorPoly, PresentationState};

/// A paint session on one mesh
pub struct PaintEngine {
    pub(crate) config: PaintConfig,
    /// Mesh as it was before the session, for restore
    source: SourceMesh,
    /// Exploded working copy
    pub(crate) mesh: ExplodedMesh,
    pub(crate) topology: MeshTopology,
    pub(crate) uvs: UvBuffer,
    /// Active palette texture; colors sample as neutral without one
    pub(crate) palette: Option<Palette>,
    pub(crate) history: UndoHistory,
    pub(crate) selection: BTreeSet<FaceId>,
    pub(crate) tool_action: ToolAction,
    /// Positions from before the first `move_faces`
    pub(crate) moved_backup: Option<Vec<Vec3>>,
    /// Per-face UV writes since rebuild
    pub(crate) uv_writes: u64,
}

impl PaintEngine {
    /// Prepare a mesh for painting
    ///
    /// Explodes the mesh, derives topology (indexing, corner angles, face
    /// graph) and starts a fresh undo history with the initial UVs as
    /// baseline. Malformed topology is reported, not rejected; only
    /// structurally invalid input (bad index list, mismatched attribute
    /// arrays) is an error.
    pub fn rebuild(
        mesh: SourceMesh,
        palette: Option<Palette>,
        config: PaintConfig,
    ) -> Result<Self, PaintError> {
        let start = Instant::now();
        let exploded = mesh.explode()?;
        let explode_elapsed = start.elapsed();

        let topology = MeshTopology::build(&exploded.positions, &exploded.triangles);
        let uvs = UvBuffer::from_corners(exploded.uvs.clone());

        let mut history = UndoHistory::new();
        history.reset(&uvs);

        info!(
            "Rebuilt mesh for painting: {} faces, {} vertices exploded in {:?}, {:.2} links per face",
            exploded.face_count(),
            exploded.vertex_count(),
            explode_elapsed,
            topology.average_links()
        );

        Ok(Self {
            config,
            source: mesh,
            mesh: exploded,
            topology,
            uvs,
            palette,
            history,
            selection: BTreeSet::new(),
            tool_action: ToolAction::Paint,
            moved_backup: None,
            uv_writes: 0,
        })
    }

    /// Abandon the session and hand back the mesh exactly as it came in
    pub fn restore_old_mesh(self) -> SourceMesh {
        info!("Restoring pre-session mesh ({} faces)", self.source.face_count());
        self.source
    }

    /// The painted mesh: exploded geometry with current UVs
    ///
    /// Faces displaced by [`Self::move_faces`] are exported at their
    /// original positions.
    pub fn painted_mesh(&self) -> SourceMesh {
        let mut painted = self.mesh.to_source_mesh(self.uvs.as_slice());
        if let Some(backup) = &self.moved_backup {
            painted.positions.clone_from(backup);
        }
        painted
    }

    /// The mesh captured at rebuild time
    pub fn original_mesh(&self) -> &SourceMesh {
        &self.source
    }

    /// Exploded working mesh
    pub fn mesh(&self) -> &ExplodedMesh {
        &self.mesh
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PaintConfig {
        &mut self.config
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.uvs.face_count()
    }

    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    /// What the face graph builder had to drop
    pub fn topology_report(&self) -> &TopologyReport {
        self.topology.report()
    }

    /// Current UV buffer
    pub fn uvs(&self) -> &UvBuffer {
        &self.uvs
    }

    /// UV of one face
    pub fn face_uv(&self, face: FaceId) -> Option<Vec2> {
        self.uvs.get(face)
    }

    /// Number of per-face UV writes since rebuild
    pub fn uv_writes(&self) -> u64 {
        self.uv_writes
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Swap the palette texture without touching UVs
    pub fn set_palette(&mut self, palette: Option<Palette>) {
        self.palette = palette;
    }

    /// Palette color under a UV; neutral white without a palette
    pub fn texture_color(&self, uv: Vec2) -> Rgba8 {
        self.palette
            .as_ref()
            .and_then(|palette| palette.sample(uv))
            .unwrap_or(NEUTRAL_COLOR)
    }

    /// Current color of a face
    pub fn face_color(&self, face: FaceId) -> Option<Rgba8> {
        self.uvs.get(face).map(|uv| self.texture_color(uv))
    }

    /// Edge neighbors of a face
    pub fn get_face_links(&self, face: FaceId) -> &[FaceLink] {
        self.topology.graph().links(face)
    }

    /// The link from one face to an adjacent face
    pub fn find_link(&self, from: FaceId, to: FaceId) -> Option<&FaceLink> {
        self.topology.graph().find_link(from, to)
    }

    /// Quad partner of a face under the configured tolerance
    pub fn find_quad(&self, face: FaceId) -> Option<FaceId> {
        self.topology.find_quad(face, self.config.quad_tolerance)
    }

    /// Loop walked from `f1` into `f2`
    pub fn find_loop(&self, f1: FaceId, f2: FaceId) -> Vec<FaceId> {
        self.topology.find_loop(
            f1,
            f2,
            self.config.quad_tolerance,
            self.config.loop_iteration_cap,
        )
    }

    /// Loop through the edge between `f1` and `f2`, in both directions
    pub fn find_loop_bidirectional(&self, f1: FaceId, f2: FaceId) -> Vec<FaceId> {
        self.topology.find_loop_bidirectional(
            f1,
            f2,
            self.config.quad_tolerance,
            self.config.loop_iteration_cap,
        )
    }

    /// Write a face's UV, counting the write
    pub(crate) fn write_uv(&mut self, face: FaceId, uv: Vec2) -> bool {
        let written = self.uvs.set(face, uv);
        if written {
            self.uv_writes += 1;
        }
        written
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_meshes::{quad_grid, single_triangle, square_tube, stripes};

    pub(crate) fn engine_for(mesh: SourceMesh) -> PaintEngine {
        PaintEngine::rebuild(mesh, Some(stripes()), PaintConfig::default()).unwrap()
    }

    #[test]
    fn test_rebuild_explodes_mesh() {
        let engine = engine_for(quad_grid(2, 2));
        assert_eq!(engine.face_count(), 8);
        assert_eq!(engine.mesh().vertex_count(), 24);
        assert_eq!(engine.uvs().as_slice().len(), 24);
        assert!(engine.topology_report().is_clean());
        assert!(!engine.is_modified());
        assert_eq!(engine.uv_writes(), 0);
    }

    #[test]
    fn test_rebuild_rejects_bad_indices() {
        let mut mesh = single_triangle();
        mesh.indices.push(0);
        assert!(matches!(
            PaintEngine::rebuild(mesh, None, PaintConfig::default()),
            Err(PaintError::IndexCount(4))
        ));

        let mut mesh = single_triangle();
        mesh.indices[2] = 7;
        assert!(matches!(
            PaintEngine::rebuild(mesh, None, PaintConfig::default()),
            Err(PaintError::IndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn test_restore_returns_untouched_mesh() {
        let mesh = quad_grid(1, 1);
        let mut engine = engine_for(mesh.clone());
        engine.full_repaint(Vec2::ONE);
        engine.move_faces(&[FaceId(0)], Vec3::Z);

        assert_eq!(engine.restore_old_mesh(), mesh);
    }

    #[test]
    fn test_painted_mesh_carries_uvs() {
        let mut engine = engine_for(quad_grid(1, 1));
        engine.set(FaceId(1), Vec2::new(0.25, 0.75));

        let painted = engine.painted_mesh();
        assert_eq!(painted.indices, (0..6).collect::<Vec<u32>>());
        assert_eq!(painted.uvs[3..6], [Vec2::new(0.25, 0.75); 3]);
        assert_eq!(painted.uvs[0], Vec2::ZERO);
    }

    #[test]
    fn test_texture_color_without_palette_is_neutral() {
        let mut engine = engine_for(single_triangle());
        engine.set_palette(None);
        assert_eq!(engine.texture_color(Vec2::new(0.3, 0.3)), NEUTRAL_COLOR);
        assert_eq!(engine.face_color(FaceId(0)), Some(NEUTRAL_COLOR));
        assert_eq!(engine.face_color(FaceId(1)), None);
    }

    #[test]
    fn test_isolated_triangle() {
        let mut engine = engine_for(single_triangle());
        assert!(engine.get_face_links(FaceId(0)).is_empty());
        assert_eq!(engine.find_quad(FaceId(0)), None);
        assert_eq!(engine.fill_paint(FaceId(0), Vec2::ONE, false), 1);
        assert_eq!(engine.face_uv(FaceId(0)), Some(Vec2::ONE));
    }

    #[test]
    fn test_quad_and_loop_pass_through() {
        let engine = engine_for(square_tube());
        assert_eq!(engine.find_quad(FaceId(0)), Some(FaceId(1)));
        assert!(engine.find_link(FaceId(0), FaceId(3)).is_some());
        assert_eq!(engine.find_loop(FaceId(0), FaceId(3)).len(), 8);
        assert_eq!(engine.find_loop_bidirectional(FaceId(0), FaceId(3)).len(), 8);
    }
}
