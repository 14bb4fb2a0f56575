//! Undo/redo history for the glyph being edited
//!
//! Stores whole-matrix snapshots taken *before* each mutation:
//! - `begin_mutation()` pushes the pre-edit state and drops all redo entries
//! - the undo stack is bounded, the oldest snapshot is evicted first
//! - a history belongs to exactly one (font, glyph) pair and is thrown away on switch

use std::collections::VecDeque;

use crate::{PixelMatrix, Result};

/// Default number of undo steps kept per glyph
pub const MAX_HISTORY: usize = 50;

/// Availability of undo/redo, derived from the stack lengths
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStatus {
    Empty,
    HasUndo,
    HasRedo,
    HasBoth,
}

/// Trait for editors that expose undo/redo of the active glyph
pub trait GlyphUndoState {
    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Restore the state before the last mutation. `Ok(None)` if there is nothing to undo.
    fn undo(&mut self) -> Result<Option<&PixelMatrix>>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Re-apply the last undone mutation. `Ok(None)` if there is nothing to redo.
    fn redo(&mut self) -> Result<Option<&PixelMatrix>>;
}

#[derive(Clone, Debug)]
pub struct EditHistory {
    undo_stack: VecDeque<PixelMatrix>,
    redo_stack: Vec<PixelMatrix>,
    limit: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl EditHistory {
    /// A limit of 0 is raised to 1 so the last edit can always be undone.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record the state a mutation is about to change. Must run before the mutation.
    pub fn begin_mutation(&mut self, current: &PixelMatrix) {
        self.undo_stack.push_back(current.clone());
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, current: &PixelMatrix) -> Option<PixelMatrix> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    pub fn redo(&mut self, current: &PixelMatrix) -> Option<PixelMatrix> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current.clone());
        debug_assert!(self.undo_stack.len() <= self.limit);
        Some(next)
    }

    pub fn reset_session(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn state(&self) -> HistoryStatus {
        match (self.can_undo(), self.can_redo()) {
            (false, false) => HistoryStatus::Empty,
            (true, false) => HistoryStatus::HasUndo,
            (false, true) => HistoryStatus::HasRedo,
            (true, true) => HistoryStatus::HasBoth,
        }
    }
}
