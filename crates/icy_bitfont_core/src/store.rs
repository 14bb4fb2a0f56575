//! Glyph byte storage for all registered fonts.
//!
//! Every font keeps two buffers: `current`, which edits write into, and
//! `baseline`, a copy taken at registration that nothing ever writes to.

use crate::{BitFontError, FontDefinition, Result};

#[derive(Clone, Debug)]
struct FontSlot {
    definition: FontDefinition,
    current: Vec<u8>,
    baseline: Box<[u8]>,
}

impl FontSlot {
    fn range(&self, code: usize) -> Result<std::ops::Range<usize>> {
        let start = self.definition.glyph_offset(code)?;
        Ok(start..start + self.definition.bytes_per_char)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GlyphStore {
    fonts: Vec<FontSlot>,
}

impl GlyphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font and its glyph data, returns the new font id.
    ///
    /// `data` must hold exactly `glyph_count * bytes_per_char` bytes.
    pub fn add_font(&mut self, definition: FontDefinition, data: Vec<u8>) -> Result<usize> {
        definition.validate()?;
        if data.len() != definition.buffer_len() {
            return Err(BitFontError::shape_mismatch(format!(
                "font '{}' needs {} bytes of glyph data, got {}",
                definition.name,
                definition.buffer_len(),
                data.len()
            )));
        }
        log::debug!(
            "registering font '{}' ({}x{}, {} bytes per char)",
            definition.name,
            definition.width,
            definition.height,
            definition.bytes_per_char
        );
        let baseline = data.clone().into_boxed_slice();
        self.fonts.push(FontSlot {
            definition,
            current: data,
            baseline,
        });
        Ok(self.fonts.len() - 1)
    }

    /// Register a font with all glyphs blank.
    pub fn add_blank_font(&mut self, definition: FontDefinition) -> Result<usize> {
        let data = vec![0; definition.buffer_len()];
        self.add_font(definition, data)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn font(&self, font_id: usize) -> Result<&FontDefinition> {
        self.slot(font_id).map(|slot| &slot.definition)
    }

    pub fn fonts(&self) -> impl Iterator<Item = &FontDefinition> {
        self.fonts.iter().map(|slot| &slot.definition)
    }

    /// Current bytes of a glyph, `bytes_per_char` long.
    pub fn read_glyph(&self, font_id: usize, code: usize) -> Result<&[u8]> {
        let slot = self.slot(font_id)?;
        let range = slot.range(code)?;
        Ok(&slot.current[range])
    }

    /// Original bytes of a glyph as registered.
    pub fn read_baseline(&self, font_id: usize, code: usize) -> Result<&[u8]> {
        let slot = self.slot(font_id)?;
        let range = slot.range(code)?;
        Ok(&slot.baseline[range])
    }

    /// Overwrite a whole glyph slice.
    pub fn write_glyph(&mut self, font_id: usize, code: usize, bytes: &[u8]) -> Result<()> {
        let slot = self.slot_mut(font_id)?;
        let range = slot.range(code)?;
        if bytes.len() != range.len() {
            return Err(BitFontError::shape_mismatch(format!(
                "glyph {code} of font '{}' takes {} bytes, got {}",
                slot.definition.name,
                range.len(),
                bytes.len()
            )));
        }
        slot.current[range].copy_from_slice(bytes);
        Ok(())
    }

    /// Write encoded pixel rows at the start of a glyph slice.
    ///
    /// Bytes past `rows.len()` keep their value, so fonts with padding after
    /// the pixel rows don't lose it.
    pub fn write_rows(&mut self, font_id: usize, code: usize, rows: &[u8]) -> Result<()> {
        let slot = self.slot_mut(font_id)?;
        let range = slot.range(code)?;
        if rows.len() > range.len() {
            return Err(BitFontError::shape_mismatch(format!(
                "glyph {code} of font '{}' takes {} bytes, got {} rows",
                slot.definition.name,
                range.len(),
                rows.len()
            )));
        }
        slot.current[range.start..range.start + rows.len()].copy_from_slice(rows);
        Ok(())
    }

    /// Whether a glyph differs from its baseline.
    pub fn is_modified(&self, font_id: usize, code: usize) -> Result<bool> {
        Ok(self.read_glyph(font_id, code)? != self.read_baseline(font_id, code)?)
    }

    fn slot(&self, font_id: usize) -> Result<&FontSlot> {
        let font_count = self.fonts.len();
        self.fonts.get(font_id).ok_or(BitFontError::FontOutOfRange { font_id, font_count })
    }

    fn slot_mut(&mut self, font_id: usize) -> Result<&mut FontSlot> {
        let font_count = self.fonts.len();
        self.fonts.get_mut(font_id).ok_or(BitFontError::FontOutOfRange { font_id, font_count })
    }
}
