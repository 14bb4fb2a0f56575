use crate::{codec, EditHistory, GlyphStore, HistoryStatus, PixelMatrix, Result};

/// Edit context of one (font, glyph) pair.
///
/// Created by `FontEditor::load_glyph`; selecting another glyph or font
/// replaces the session, which discards its history.
#[derive(Clone, Debug)]
pub struct EditorSession {
    pub(crate) font_id: usize,
    pub(crate) glyph_code: usize,
    pub(crate) matrix: PixelMatrix,
    pub(crate) history: EditHistory,
    /// Value painted by the active stroke
    pub(crate) stroke_value: Option<bool>,
}

impl EditorSession {
    pub(crate) fn new(font_id: usize, glyph_code: usize, matrix: PixelMatrix, history_limit: usize) -> Self {
        Self {
            font_id,
            glyph_code,
            matrix,
            history: EditHistory::new(history_limit),
            stroke_value: None,
        }
    }

    pub fn font_id(&self) -> usize {
        self.font_id
    }

    pub fn glyph_code(&self) -> usize {
        self.glyph_code
    }

    pub fn matrix(&self) -> &PixelMatrix {
        &self.matrix
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn history_status(&self) -> HistoryStatus {
        self.history.state()
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke_value.is_some()
    }

    /// Re-encode the matrix into the store so the glyph bytes match what is shown.
    pub(crate) fn commit(&self, store: &mut GlyphStore) -> Result<()> {
        let rows = codec::encode(&self.matrix);
        store.write_rows(self.font_id, self.glyph_code, &rows)
    }
}
