//! Glyph-level operations for the font editor
//!
//! - Pixel editing (`toggle_pixel`, with an optional explicit value)
//! - Strokes: press and drag painting that undoes as one step
//! - Reset to the glyph as it was registered
//!
//! Each mutation snapshots the matrix into the history first, then edits
//! the matrix and re-encodes it into the store.

use crate::{codec, BitFontError, PixelMatrix, Result};

use super::FontEditor;

impl FontEditor {
    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Flip a pixel, or set it to `value` if given. Always one undo step.
    pub fn toggle_pixel(&mut self, row: usize, col: usize, value: Option<bool>) -> Result<&PixelMatrix> {
        let session = self.session.as_mut().ok_or(BitFontError::NoActiveGlyph)?;
        session.matrix.check_bounds(row, col)?;
        session.stroke_value = None;

        session.history.begin_mutation(&session.matrix);
        match value {
            Some(value) => {
                session.matrix.set(row, col, value)?;
            }
            None => {
                session.matrix.toggle(row, col)?;
            }
        }
        session.commit(&mut self.store)?;
        Ok(&session.matrix)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Strokes
    // ═══════════════════════════════════════════════════════════════════════

    /// Start painting at a pixel.
    ///
    /// The stroke paints the inverse of the pressed pixel; every pixel touched
    /// by `continue_stroke` gets that same value. Only the state before the
    /// stroke goes into the history.
    pub fn begin_stroke(&mut self, row: usize, col: usize) -> Result<&PixelMatrix> {
        let session = self.session.as_mut().ok_or(BitFontError::NoActiveGlyph)?;
        session.matrix.check_bounds(row, col)?;

        let value = !session.matrix.get(row, col).unwrap_or(false);
        session.history.begin_mutation(&session.matrix);
        session.matrix.set(row, col, value)?;
        session.stroke_value = Some(value);
        session.commit(&mut self.store)?;
        Ok(&session.matrix)
    }

    /// Paint one more pixel of the active stroke. Does nothing without a stroke.
    pub fn continue_stroke(&mut self, row: usize, col: usize) -> Result<&PixelMatrix> {
        let session = self.session.as_mut().ok_or(BitFontError::NoActiveGlyph)?;
        if let Some(value) = session.stroke_value {
            session.matrix.set(row, col, value)?;
            session.commit(&mut self.store)?;
        }
        Ok(&session.matrix)
    }

    pub fn end_stroke(&mut self) {
        if let Some(session) = &mut self.session {
            session.stroke_value = None;
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Reset
    // ═══════════════════════════════════════════════════════════════════════

    /// Restore the glyph to its registered bytes. Undoable like any edit.
    pub fn reset_to_baseline(&mut self) -> Result<&PixelMatrix> {
        let session = self.session.as_mut().ok_or(BitFontError::NoActiveGlyph)?;
        let font = self.store.font(session.font_id)?;
        let baseline = self.store.read_baseline(session.font_id, session.glyph_code)?;
        let original = codec::decode(baseline, font.width, font.height);

        session.stroke_value = None;
        session.history.begin_mutation(&session.matrix);
        session.matrix = original;
        session.commit(&mut self.store)?;
        Ok(&session.matrix)
    }
}
