//! Face coloring: single faces, flood fills and global replace

use std::collections::HashSet;

use glam::Vec2;
use tracing::debug;

use super::PaintEngine;
use crate::types::{FaceId, FillVariant, Rgba8, ToolAction};

impl PaintEngine {
    /// Apply the active tool action to one face
    ///
    /// Paint writes the UV (subject to restrict-to-selection), Select and
    /// Deselect edit the selection. Returns true if anything changed.
    pub fn set(&mut self, face: FaceId, uv: Vec2) -> bool {
        match self.tool_action {
            ToolAction::Paint => self.can_paint(face) && self.write_uv(face, uv),
            ToolAction::Select => self.select(face),
            ToolAction::Deselect => self.deselect(face),
        }
    }

    /// [`Self::set`] for each face in turn (loop and quad brushes)
    pub fn set_faces(&mut self, faces: &[FaceId], uv: Vec2) -> usize {
        faces.iter().filter(|&&face| self.set(face, uv)).count()
    }

    /// Brush stroke: the face, plus its quad partner when auto quads is on
    pub fn paint_with_quad(&mut self, face: FaceId, uv: Vec2) -> usize {
        let mut changed = usize::from(self.set(face, uv));
        if self.config.auto_quads {
            if let Some(partner) = self.find_quad(face) {
                changed += usize::from(self.set(partner, uv));
            }
        }
        changed
    }

    /// True if painting may write to this face
    pub fn can_paint(&self, face: FaceId) -> bool {
        self.uvs.contains(face)
            && (!self.config.restrict_to_selection || self.selection.contains(&face))
    }

    /// Set every face to the same UV, ignoring the selection
    pub fn full_repaint(&mut self, uv: Vec2) {
        self.uvs.fill(uv);
        self.uv_writes += self.uvs.face_count() as u64;
    }

    /// Breadth-first fill from `start`
    ///
    /// With `unconditional` false the fill only spreads into neighbors whose
    /// current color equals the start face's color; with it true it covers
    /// the whole connected element. Faces that may not be painted are
    /// neither painted nor spread through. Stops after the configured
    /// number of rounds, keeping what was painted.
    ///
    /// Returns the number of faces painted.
    pub fn fill_paint(&mut self, start: FaceId, uv: Vec2, unconditional: bool) -> usize {
        let Some(seed_color) = self.face_color(start) else {
            return 0;
        };
        if !self.can_paint(start) {
            return 0;
        }

        let mut visited = vec![false; self.face_count()];
        let mut border = HashSet::from([start]);
        let mut neighbors = HashSet::new();
        let mut painted = 0;
        let mut rounds = 0;

        loop {
            for &face in &border {
                self.write_uv(face, uv);
                visited[face.index()] = true;
                painted += 1;
            }

            neighbors.clear();
            for &face in &border {
                for link in self.topology.graph().links(face) {
                    let next = link.with;
                    if visited[next.index()] || !self.can_paint(next) {
                        continue;
                    }
                    if unconditional || self.face_color(next) == Some(seed_color) {
                        neighbors.insert(next);
                    }
                }
            }
            std::mem::swap(&mut border, &mut neighbors);

            rounds += 1;
            if border.is_empty() {
                break;
            }
            if rounds >= self.config.fill_iteration_cap {
                debug!("Fill stopped at the {} round cap", rounds);
                break;
            }
        }

        debug!("Fill painted {} faces in {} rounds", painted, rounds);
        painted
    }

    /// Paint the whole connected element containing `face`
    pub fn fill_element(&mut self, face: FaceId, uv: Vec2) -> usize {
        self.fill_paint(face, uv, true)
    }

    /// Repaint every face in the mesh that has the same color as `face`
    ///
    /// Unlike [`Self::fill_paint`] this ignores adjacency, so disconnected
    /// islands of the color change too.
    pub fn fill_replace(&mut self, face: FaceId, uv: Vec2) -> usize {
        let Some(pick) = self.face_color(face) else {
            return 0;
        };

        let mut replaced = 0;
        for index in 0..self.face_count() {
            let other = FaceId::from(index);
            if self.can_paint(other) && self.face_color(other) == Some(pick) {
                self.write_uv(other, uv);
                replaced += 1;
            }
        }
        debug!("Replaced color {:?} on {} faces", pick, replaced);
        replaced
    }

    /// Run one of the fill tools; returns the number of faces painted
    pub fn fill(&mut self, variant: FillVariant, face: FaceId, uv: Vec2) -> usize {
        match variant {
            FillVariant::Flood => self.fill_paint(face, uv, false),
            FillVariant::Replace => self.fill_replace(face, uv),
            FillVariant::Element => self.fill_element(face, uv),
            FillVariant::All => {
                self.full_repaint(uv);
                self.face_count()
            }
        }
    }

    /// UV and color of a face (eyedropper)
    pub fn pick(&self, face: FaceId) -> Option<(Vec2, Rgba8)> {
        let uv = self.uvs.get(face)?;
        Some((uv, self.texture_color(uv)))
    }
}
