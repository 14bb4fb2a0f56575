//! Undo/redo tests
//!
//! Tests the history bound, redo invalidation and that history never
//! leaks across glyph or font switches.

use icy_bitfont_core::{codec, FontEditor, GlyphUndoState, HistoryStatus, PixelMatrix, MAX_HISTORY};

use crate::helpers::{create_test_editor, create_test_store, current_bytes, FONT_5X8, FONT_8X8, GLYPH_A};

/// Toggle pixels in a fixed walk so every step yields a distinct matrix
fn walk_pixel(step: usize) -> (usize, usize) {
    (step / 8 % 8, step % 8)
}

#[test]
fn test_undo_redo_single_toggle() {
    let mut editor = create_test_editor();
    let original = editor.matrix().unwrap().clone();

    let edited = editor.toggle_pixel(6, 6, None).unwrap().clone();
    assert_eq!(editor.history_status(), HistoryStatus::HasUndo);

    assert_eq!(editor.undo().unwrap(), Some(&original));
    assert_eq!(editor.history_status(), HistoryStatus::HasRedo);

    assert_eq!(editor.redo().unwrap(), Some(&edited));
    assert_eq!(codec::encode(&edited), current_bytes(&editor));
}

#[test]
fn test_undo_on_empty_stack_is_noop() {
    let mut editor = create_test_editor();

    assert!(!editor.can_undo());
    assert_eq!(editor.undo().unwrap(), None);
    assert_eq!(editor.redo().unwrap(), None);
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());
    assert_eq!(editor.history_status(), HistoryStatus::Empty);
}

#[test]
fn test_history_bound() {
    let mut editor = create_test_editor();
    let mut states: Vec<PixelMatrix> = Vec::new();

    for step in 0..60 {
        states.push(editor.matrix().unwrap().clone());
        let (row, col) = walk_pixel(step);
        editor.toggle_pixel(row, col, None).unwrap();
    }

    assert_eq!(editor.undo_stack_len(), MAX_HISTORY);

    // the 50 most recent pre-edit states come back newest first
    for expected in states.iter().rev().take(MAX_HISTORY) {
        let restored = editor.undo().unwrap().cloned();
        assert_eq!(restored.as_ref(), Some(expected));
        assert_eq!(codec::encode(expected), current_bytes(&editor));
    }

    // the oldest 10 were evicted
    assert_eq!(editor.undo().unwrap(), None);
    assert_eq!(*editor.matrix().unwrap(), states[10]);
    assert_eq!(editor.redo_stack_len(), MAX_HISTORY);
}

#[test]
fn test_custom_history_limit() {
    let mut editor = FontEditor::with_history_limit(create_test_store(), 3);
    editor.load_glyph(FONT_8X8, 65).unwrap();

    for step in 0..5 {
        let (row, col) = walk_pixel(step);
        editor.toggle_pixel(row, col, None).unwrap();
    }
    assert_eq!(editor.undo_stack_len(), 3);
}

#[test]
fn test_redo_invalidated_by_edit() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(0, 0, None).unwrap();
    editor.toggle_pixel(0, 1, None).unwrap();
    editor.undo().unwrap();
    assert!(editor.can_redo());

    editor.toggle_pixel(5, 5, None).unwrap();
    assert!(!editor.can_redo());

    let before = current_bytes(&editor);
    assert_eq!(editor.redo().unwrap(), None);
    assert_eq!(current_bytes(&editor), before);
}

#[test]
fn test_redo_invalidated_by_reset() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(0, 0, None).unwrap();
    editor.undo().unwrap();
    editor.reset_to_baseline().unwrap();

    assert_eq!(editor.redo().unwrap(), None);
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut editor = create_test_editor();

    for step in 0..5 {
        let (row, col) = walk_pixel(step);
        editor.toggle_pixel(row, col, None).unwrap();
    }
    let edited = current_bytes(&editor);

    while editor.undo().unwrap().is_some() {}
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());

    while editor.redo().unwrap().is_some() {}
    assert_eq!(current_bytes(&editor), edited);
    assert_eq!(editor.undo_stack_len(), 5);
}

#[test]
fn test_session_isolation_between_glyphs() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(7, 7, None).unwrap();
    editor.toggle_pixel(7, 6, None).unwrap();
    editor.undo().unwrap();
    let edited_a = current_bytes(&editor);

    editor.load_glyph(FONT_8X8, 66).unwrap();
    editor.toggle_pixel(0, 0, None).unwrap();

    editor.load_glyph(FONT_8X8, 65).unwrap();
    assert_eq!(editor.undo_stack_len(), 0);
    assert_eq!(editor.redo_stack_len(), 0);
    assert_eq!(editor.undo().unwrap(), None);

    // the bytes of 'A' persist
    assert_eq!(current_bytes(&editor), edited_a);
    assert_eq!(codec::encode(editor.matrix().unwrap()), edited_a);
}

#[test]
fn test_session_isolation_between_fonts() {
    let mut editor = create_test_editor();
    editor.toggle_pixel(0, 0, None).unwrap();

    editor.load_glyph(FONT_5X8, 65).unwrap();
    assert_eq!(editor.history_status(), HistoryStatus::Empty);
    assert_eq!(editor.matrix().unwrap().size(), (5, 8));

    editor.toggle_pixel(0, 0, None).unwrap();
    editor.undo().unwrap();

    // undo in the 5x8 font never touches the 8x8 font
    assert_eq!(editor.store().read_glyph(FONT_8X8, 65).unwrap()[0], 0x98);
}

#[test]
fn test_reload_same_glyph_resets_history() {
    let mut editor = create_test_editor();
    editor.toggle_pixel(0, 0, None).unwrap();

    editor.load_glyph(FONT_8X8, 65).unwrap();
    assert!(!editor.can_undo());
}

#[test]
fn test_reset_session() {
    let mut editor = create_test_editor();
    editor.toggle_pixel(0, 0, None).unwrap();
    editor.toggle_pixel(0, 1, None).unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.history_status(), HistoryStatus::HasBoth);

    editor.reset_session();
    assert_eq!(editor.history_status(), HistoryStatus::Empty);
    assert_eq!(current_bytes(&editor)[0], 0x98);
}
