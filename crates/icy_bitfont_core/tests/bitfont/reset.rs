//! Reset to baseline tests

use icy_bitfont_core::{codec, GlyphUndoState};

use crate::helpers::{create_test_editor, current_bytes, FONT_8X8, GLYPH_A};

#[test]
fn test_reset_restores_original_bytes() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(0, 0, None).unwrap();
    editor.toggle_pixel(4, 4, None).unwrap();
    editor.begin_stroke(7, 0).unwrap();
    editor.continue_stroke(7, 5).unwrap();
    editor.end_stroke();
    assert_ne!(current_bytes(&editor), GLYPH_A.to_vec());

    let matrix = editor.reset_to_baseline().unwrap();
    assert_eq!(*matrix, codec::decode(&GLYPH_A, 8, 8));
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());
    assert!(!editor.store().is_modified(FONT_8X8, 65).unwrap());
}

#[test]
fn test_reset_is_one_undo_step() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(0, 0, None).unwrap();
    editor.toggle_pixel(0, 7, None).unwrap();
    let edited = current_bytes(&editor);

    editor.reset_to_baseline().unwrap();
    assert_eq!(editor.undo_stack_len(), 3);

    editor.undo().unwrap();
    assert_eq!(current_bytes(&editor), edited);

    editor.redo().unwrap();
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());
}

#[test]
fn test_reset_unmodified_glyph() {
    let mut editor = create_test_editor();

    editor.reset_to_baseline().unwrap();
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());
    assert!(editor.can_undo());
}

#[test]
fn test_reset_after_reload() {
    let mut editor = create_test_editor();

    editor.toggle_pixel(1, 2, None).unwrap();
    editor.load_glyph(FONT_8X8, 66).unwrap();
    editor.load_glyph(FONT_8X8, 65).unwrap();

    // edits survive the glyph switch, history does not
    assert_ne!(current_bytes(&editor), GLYPH_A.to_vec());
    assert!(!editor.can_undo());

    editor.reset_to_baseline().unwrap();
    assert_eq!(current_bytes(&editor), GLYPH_A.to_vec());
}
