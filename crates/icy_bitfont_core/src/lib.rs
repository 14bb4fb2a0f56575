//! Model layer for editing embedded bitmap fonts
//!
//! Fonts hold 128 glyphs of up to 8 pixels width, one byte per pixel row.
//! - `codec` - packed bytes <-> `PixelMatrix`
//! - `GlyphStore` - current and baseline bytes of every font
//! - `EditHistory` - bounded undo/redo snapshots for the glyph being edited
//! - `export` - hex listing, clipboard line and C source output
//! - `FontEditor` - the command surface a UI drives
//!
//! Rendering, clipboard and file access are left to the caller.

pub mod codec;
mod editor;
mod error;
pub mod export;
mod font_definition;
mod history;
pub mod labels;
mod matrix;
mod store;

pub use editor::{EditorSession, FontEditor};
pub use error::{BitFontError, Result};
pub use font_definition::FontDefinition;
pub use history::{EditHistory, GlyphUndoState, HistoryStatus, MAX_HISTORY};
pub use matrix::PixelMatrix;
pub use store::GlyphStore;

/// Number of glyphs in every font (7-bit ASCII)
pub const GLYPH_COUNT: usize = 128;
