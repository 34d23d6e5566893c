//! Linear undo/redo over whole-buffer UV snapshots

use glam::Vec2;
use tracing::debug;

use crate::uv_buffer::UvBuffer;

/// Snapshots of the UV buffer with a cursor at the active one
///
/// Saving after an undo overwrites the slot ahead of the cursor and
/// zeroes the redo budget, so the old future is unreachable. Slots past
/// the cursor are kept allocated and reused by later saves.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    levels: Vec<Vec<Vec2>>,
    /// Active snapshot; None before the first save
    cursor: Option<usize>,
    /// States ahead of the cursor reachable by redo
    redo_budget: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all history and record `uvs` as the baseline
    pub fn reset(&mut self, uvs: &UvBuffer) {
        self.levels.clear();
        self.cursor = None;
        self.redo_budget = 0;
        self.save_state(uvs);
    }

    /// Record the current buffer as a new state
    pub fn save_state(&mut self, uvs: &UvBuffer) {
        let position = self.cursor.map_or(0, |c| c + 1);
        match self.levels.get_mut(position) {
            Some(slot) => {
                slot.clear();
                slot.extend_from_slice(uvs.as_slice());
            }
            None => self.levels.push(uvs.as_slice().to_vec()),
        }
        self.cursor = Some(position);
        self.redo_budget = 0;
        debug!("Undo: saved state {}", position);
    }

    /// Step back one state, writing it into `uvs`
    ///
    /// Returns false (and leaves `uvs` alone) at the start of history.
    pub fn undo(&mut self, uvs: &mut UvBuffer) -> bool {
        let Some(cursor) = self.cursor.filter(|&c| c > 0) else {
            debug!("Undo: nothing to undo");
            return false;
        };
        uvs.restore(&self.levels[cursor - 1]);
        self.cursor = Some(cursor - 1);
        self.redo_budget += 1;
        debug!("Undo: back to state {} ({} redo)", cursor - 1, self.redo_budget);
        true
    }

    /// Step forward one undone state, writing it into `uvs`
    pub fn redo(&mut self, uvs: &mut UvBuffer) -> bool {
        let Some(cursor) = self.cursor.filter(|_| self.redo_budget > 0) else {
            debug!("Undo: nothing to redo");
            return false;
        };
        self.redo_budget -= 1;
        uvs.restore(&self.levels[cursor + 1]);
        self.cursor = Some(cursor + 1);
        debug!("Undo: forward to state {} ({} redo)", cursor + 1, self.redo_budget);
        true
    }

    /// True once anything has been saved past the baseline
    pub fn is_modified(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_undo(&self) -> bool {
        self.is_modified()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_budget > 0
    }

    /// Position of the active snapshot
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of states redo can still reach
    pub fn redo_count(&self) -> usize {
        self.redo_budget
    }

    /// Number of stored snapshots, including overwritten futures
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
