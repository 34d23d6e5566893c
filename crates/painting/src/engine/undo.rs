//! Undo/redo for the paint engine's UV buffer
//!
//! Moving faces for selection display is not part of this history.

use super::PaintEngine;
use crate::history::UndoHistory;

impl PaintEngine {
    /// Forget all history; the current UVs become the baseline
    pub fn undo_reset(&mut self) {
        self.history.reset(&self.uvs);
    }

    /// Record the current UVs as a new undo state
    pub fn undo_save_state(&mut self) {
        self.history.save_state(&self.uvs);
    }

    /// Go back one state; returns false if there is none
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.uvs)
    }

    /// Re-apply one undone state; returns false if there is none
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.uvs)
    }

    /// True if any state was saved since the baseline
    pub fn is_modified(&self) -> bool {
        self.history.is_modified()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }
}
