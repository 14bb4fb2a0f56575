//! Font editor module structure
//!
//! - `state.rs` - `FontEditor` struct, constructors, getters, glyph selection, export
//! - `session.rs` - `EditorSession`, the per-glyph edit context
//! - `glyph_operations.rs` - Pixel toggles, strokes, reset to baseline
//! - `undo.rs` - Undo/redo

mod glyph_operations;
mod session;
mod state;
mod undo;

pub use session::EditorSession;
pub use state::FontEditor;
