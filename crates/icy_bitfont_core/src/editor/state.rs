//! Font Editor State
//!
//! Owns the glyph store and the session of the glyph being edited. The UI
//! layer selects a glyph with `load_glyph()`, sends pixel and history
//! commands, and renders the `PixelMatrix` and texts the commands return.
//!
//! ## Session Scope
//!
//! History is kept per glyph. Loading a glyph (even the one already loaded)
//! starts a new `EditorSession` with empty undo/redo stacks; the glyph bytes
//! written by earlier edits stay in the store.
//!
//! ## Byte Alignment
//!
//! Every command that changes the matrix re-encodes it into the store before
//! returning, so `encode(matrix)` always equals the start of the glyph slice.

use crate::{codec, export, BitFontError, EditorSession, GlyphStore, HistoryStatus, PixelMatrix, Result, MAX_HISTORY};

// ═══════════════════════════════════════════════════════════════════════════
// Font Editor
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct FontEditor {
    pub(crate) store: GlyphStore,

    /// Undo depth for new sessions
    pub(crate) history_limit: usize,

    /// `None` until the first glyph is loaded
    pub(crate) session: Option<EditorSession>,
}

impl FontEditor {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn new(store: GlyphStore) -> Self {
        Self::with_history_limit(store, MAX_HISTORY)
    }

    pub fn with_history_limit(store: GlyphStore, history_limit: usize) -> Self {
        Self {
            store,
            history_limit,
            session: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn store(&self) -> &GlyphStore {
        &self.store
    }

    pub fn into_store(self) -> GlyphStore {
        self.store
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn font_id(&self) -> Option<usize> {
        self.session.as_ref().map(EditorSession::font_id)
    }

    pub fn glyph_code(&self) -> Option<usize> {
        self.session.as_ref().map(EditorSession::glyph_code)
    }

    pub fn matrix(&self) -> Option<&PixelMatrix> {
        self.session.as_ref().map(EditorSession::matrix)
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.session.as_ref().map_or(HistoryStatus::Empty, EditorSession::history_status)
    }

    pub(crate) fn active_session(&self) -> Result<&EditorSession> {
        self.session.as_ref().ok_or(BitFontError::NoActiveGlyph)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyph Selection
    // ═══════════════════════════════════════════════════════════════════════

    /// Select a glyph for editing and return its pixels.
    ///
    /// Starts a new session, so the history of the previous glyph is gone.
    /// On error the previous session stays active.
    pub fn load_glyph(&mut self, font_id: usize, glyph_code: usize) -> Result<&PixelMatrix> {
        let font = self.store.font(font_id)?;
        let bytes = self.store.read_glyph(font_id, glyph_code)?;
        let matrix = codec::decode(bytes, font.width, font.height);
        log::debug!("editing glyph {glyph_code} of font '{}'", font.name);

        let session = self.session.insert(EditorSession::new(font_id, glyph_code, matrix, self.history_limit));
        Ok(&session.matrix)
    }

    /// Drop undo and redo history of the current glyph.
    pub fn reset_session(&mut self) {
        if let Some(session) = &mut self.session {
            session.history.reset_session();
            session.stroke_value = None;
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    /// Annotated hex listing of the current glyph
    pub fn hex_display(&self) -> Result<String> {
        let session = self.active_session()?;
        let bytes = self.store.read_glyph(session.font_id, session.glyph_code)?;
        Ok(export::format_glyph_hex(bytes))
    }

    /// Current glyph bytes as one comma separated line
    pub fn clipboard_text(&self) -> Result<String> {
        let session = self.active_session()?;
        let bytes = self.store.read_glyph(session.font_id, session.glyph_code)?;
        Ok(export::format_glyph_bytes(bytes))
    }

    /// Whole font as C source
    pub fn source_export(&self, font_id: usize) -> Result<String> {
        export::format_font_source(&self.store, font_id)
    }
}
