//! Error types for bitmap font editing

use thiserror::Error;

/// Main error type for icy_bitfont_core operations
///
/// Undo/redo on an empty stack is not an error; those calls return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitFontError {
    // === Addressing Errors ===
    #[error("Font {font_id} out of range (0..{font_count})")]
    FontOutOfRange { font_id: usize, font_count: usize },

    #[error("Glyph {code} out of range (0..{glyph_count})")]
    GlyphOutOfRange { code: usize, glyph_count: usize },

    #[error("Pixel ({row}, {col}) outside of {width}x{height} glyph")]
    PixelOutOfRange { row: usize, col: usize, width: usize, height: usize },

    // === Contract Violations ===
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    #[error("No glyph loaded")]
    NoActiveGlyph,
}

/// Result type alias for icy_bitfont_core operations
pub type Result<T> = std::result::Result<T, BitFontError>;

// === Convenience constructors ===
impl BitFontError {
    /// Create a shape mismatch error from any displayable message
    pub fn shape_mismatch(msg: impl std::fmt::Display) -> Self {
        Self::ShapeMismatch { message: msg.to_string() }
    }

    /// Whether this error is one of the out-of-range variants
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BitFontError::FontOutOfRange { .. } | BitFontError::GlyphOutOfRange { .. } | BitFontError::PixelOutOfRange { .. }
        )
    }
}
