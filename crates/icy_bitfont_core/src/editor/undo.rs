//! Undo/Redo for the font editor
//!
//! The restored matrix is written back into the store, so undo and redo keep
//! the glyph bytes aligned like any other edit. With no glyph loaded, or an
//! empty stack, both calls are no-ops returning `Ok(None)`.

use crate::{GlyphUndoState, PixelMatrix, Result};

use super::FontEditor;

impl FontEditor {
    pub fn undo_stack_len(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.history.undo_len())
    }

    pub fn redo_stack_len(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.history.redo_len())
    }
}

impl GlyphUndoState for FontEditor {
    fn can_undo(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.history.can_undo())
    }

    fn undo(&mut self) -> Result<Option<&PixelMatrix>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        let Some(previous) = session.history.undo(&session.matrix) else {
            log::debug!("nothing to undo");
            return Ok(None);
        };

        session.stroke_value = None;
        session.matrix = previous;
        session.commit(&mut self.store)?;
        Ok(Some(&session.matrix))
    }

    fn can_redo(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.history.can_redo())
    }

    fn redo(&mut self) -> Result<Option<&PixelMatrix>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        let Some(next) = session.history.redo(&session.matrix) else {
            log::debug!("nothing to redo");
            return Ok(None);
        };

        session.stroke_value = None;
        session.matrix = next;
        session.commit(&mut self.store)?;
        Ok(Some(&session.matrix))
    }
}
