use serde::{Deserialize, Serialize};

use crate::{codec::ROW_BITS, BitFontError, Result, GLYPH_COUNT};

/// Dimensions and layout of one embedded font.
///
/// `bytes_per_char` is stored, not derived: fonts may pad glyphs with extra
/// bytes after the `height` pixel rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDefinition {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub bytes_per_char: usize,
    #[serde(default = "default_glyph_count", skip_serializing)]
    glyph_count: usize,
}

fn default_glyph_count() -> usize {
    GLYPH_COUNT
}

impl FontDefinition {
    /// Creates a definition with the nominal layout of one byte per row.
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Result<Self> {
        Self::with_layout(name, width, height, height)
    }

    pub fn with_layout(name: impl Into<String>, width: usize, height: usize, bytes_per_char: usize) -> Result<Self> {
        let def = Self {
            name: name.into(),
            width,
            height,
            bytes_per_char,
            glyph_count: GLYPH_COUNT,
        };
        def.validate()?;
        Ok(def)
    }

    /// Checks the invariants a deserialized definition can't enforce by itself.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BitFontError::shape_mismatch(format!(
                "font '{}' has empty glyph size {}x{}",
                self.name, self.width, self.height
            )));
        }
        if self.width > ROW_BITS {
            return Err(BitFontError::shape_mismatch(format!(
                "font '{}' is {} pixels wide, rows hold at most {} pixels",
                self.name, self.width, ROW_BITS
            )));
        }
        if self.bytes_per_char == 0 {
            return Err(BitFontError::shape_mismatch(format!("font '{}' has zero bytes per character", self.name)));
        }
        // one byte per pixel row, rows must not spill into the next glyph
        if self.bytes_per_char < self.height {
            return Err(BitFontError::shape_mismatch(format!(
                "font '{}' stores {} bytes per character but has {} rows",
                self.name, self.bytes_per_char, self.height
            )));
        }
        if self.glyph_count != GLYPH_COUNT {
            return Err(BitFontError::shape_mismatch(format!(
                "font '{}' declares {} glyphs, expected {}",
                self.name, self.glyph_count, GLYPH_COUNT
            )));
        }
        Ok(())
    }

    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    /// Length of a complete glyph buffer for this font.
    pub fn buffer_len(&self) -> usize {
        self.glyph_count * self.bytes_per_char
    }

    /// Byte offset of a glyph inside the buffer.
    pub fn glyph_offset(&self, code: usize) -> Result<usize> {
        if code >= self.glyph_count {
            return Err(BitFontError::GlyphOutOfRange {
                code,
                glyph_count: self.glyph_count,
            });
        }
        Ok(code * self.bytes_per_char)
    }
}
