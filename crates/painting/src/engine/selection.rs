//! Face selection, tool action and the selection-visualization move

use std::collections::BTreeSet;

use glam::Vec3;
use tracing::debug;

use super::PaintEngine;
use crate::types::{FaceId, ToolAction};

impl PaintEngine {
    pub fn tool_action(&self) -> ToolAction {
        self.tool_action
    }

    /// Choose what [`Self::set`] does
    pub fn set_tool_action(&mut self, action: ToolAction) {
        self.tool_action = action;
    }

    pub fn restrict_to_selection(&self) -> bool {
        self.config.restrict_to_selection
    }

    /// Only let paint operations write to selected faces
    pub fn set_restrict_to_selection(&mut self, restrict: bool) {
        self.config.restrict_to_selection = restrict;
    }

    pub fn selection(&self) -> &BTreeSet<FaceId> {
        &self.selection
    }

    pub fn is_selected(&self, face: FaceId) -> bool {
        self.selection.contains(&face)
    }

    /// Add a face to the selection; false if invalid or already selected
    pub fn select(&mut self, face: FaceId) -> bool {
        self.uvs.contains(face) && self.selection.insert(face)
    }

    /// Remove a face from the selection
    pub fn deselect(&mut self, face: FaceId) -> bool {
        self.selection.remove(&face)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Current (possibly moved) exploded vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.mesh.positions
    }

    /// Displace faces by `offset` from where they were before any move
    ///
    /// Only vertex positions change; UVs and undo history are untouched.
    /// Original positions are backed up on first use and faces not in
    /// `faces` are put back.
    pub fn move_faces(&mut self, faces: &[FaceId], offset: Vec3) {
        let backup = self
            .moved_backup
            .get_or_insert_with(|| self.mesh.positions.clone());
        self.mesh.positions.copy_from_slice(backup);

        let corner_count = self.mesh.positions.len();
        for face in faces {
            let start = face.first_corner();
            if start + 3 > corner_count {
                continue;
            }
            for position in &mut self.mesh.positions[start..start + 3] {
                *position += offset;
            }
        }
        debug!("Moved {} faces by {}", faces.len(), offset);
    }

    /// Put every moved face back
    pub fn move_faces_undo_back(&mut self) {
        if let Some(backup) = self.moved_backup.take() {
            self.mesh.positions = backup;
            debug!("Restored moved faces");
        }
    }

    /// True while faces are displaced
    pub fn has_moved_faces(&self) -> bool {
        self.moved_backup.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::engine_for;
    use crate::test_meshes::{quad_grid, stripe_uv, BLUE, RED};

    #[test]
    fn test_select_mode_edits_selection() {
        let mut engine = engine_for(quad_grid(1, 1));
        engine.set_tool_action(ToolAction::Select);
        assert!(engine.set(FaceId(1), stripe_uv(2)));
        assert!(!engine.set(FaceId(5), stripe_uv(2)));
        assert!(engine.is_selected(FaceId(1)));
        // Selecting does not paint
        assert_eq!(engine.face_color(FaceId(1)), Some(RED));

        engine.set_tool_action(ToolAction::Deselect);
        assert!(engine.set(FaceId(1), stripe_uv(2)));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_restrict_to_selection_gates_painting() {
        let mut engine = engine_for(quad_grid(2, 1));
        engine.set_restrict_to_selection(true);

        // Nothing selected: nothing may be painted
        assert!(!engine.set(FaceId(0), stripe_uv(2)));

        engine.select(FaceId(0));
        engine.select(FaceId(1));
        assert!(engine.set(FaceId(0), stripe_uv(2)));
        assert!(!engine.set(FaceId(2), stripe_uv(2)));

        // Fill does not leak out of the selection
        assert_eq!(engine.fill_element(FaceId(1), stripe_uv(2)), 2);
        assert_eq!(engine.face_color(FaceId(3)), Some(RED));
        assert_eq!(engine.fill_replace(FaceId(2), stripe_uv(2)), 0);
        assert_eq!(engine.face_color(FaceId(1)), Some(BLUE));
    }

    #[test]
    fn test_move_faces_and_undo_back() {
        let mut engine = engine_for(quad_grid(1, 1));
        let original = engine.positions().to_vec();

        engine.move_faces(&[FaceId(0), FaceId(7)], Vec3::Z);
        assert!(engine.has_moved_faces());
        assert_eq!(engine.positions()[0], original[0] + Vec3::Z);
        assert_eq!(engine.positions()[3], original[3]);

        // Offsets apply from the original positions, not cumulatively
        engine.move_faces(&[FaceId(1)], Vec3::X);
        assert_eq!(engine.positions()[0], original[0]);
        assert_eq!(engine.positions()[4], original[4] + Vec3::X);

        engine.move_faces_undo_back();
        assert_eq!(engine.positions(), &original[..]);
        assert!(!engine.has_moved_faces());
    }

    #[test]
    fn test_moved_faces_are_not_exported() {
        let mut engine = engine_for(quad_grid(1, 1));
        let before = engine.painted_mesh().positions;

        engine.move_faces(&[FaceId(0)], Vec3::Z);
        engine.set(FaceId(0), stripe_uv(2));

        let painted = engine.painted_mesh();
        assert_eq!(painted.positions, before);
        assert_eq!(painted.uvs[0], stripe_uv(2));
        // The view still shows the offset
        assert_eq!(engine.positions()[0], before[0] + Vec3::Z);
    }
}
