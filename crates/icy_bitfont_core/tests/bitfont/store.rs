//! Glyph store tests
//!
//! Tests glyph addressing, range checks and that the baseline never changes.

use icy_bitfont_core::{BitFontError, FontDefinition, GlyphStore};

use crate::helpers::{create_test_store, FONT_5X8, FONT_8X8, GLYPH_A};

#[test]
fn test_read_glyph_slice() {
    let store = create_test_store();
    assert_eq!(store.read_glyph(FONT_8X8, 65).unwrap(), &GLYPH_A);
    assert_eq!(store.read_glyph(FONT_8X8, 66).unwrap(), &[0; 8]);
}

#[test]
fn test_glyph_code_out_of_range() {
    let store = create_test_store();
    let err = store.read_glyph(FONT_8X8, 128).unwrap_err();
    assert_eq!(err, BitFontError::GlyphOutOfRange { code: 128, glyph_count: 128 });
    assert!(err.is_out_of_range());
    assert!(store.read_baseline(FONT_8X8, 200).is_err());
}

#[test]
fn test_unknown_font() {
    let store = create_test_store();
    assert_eq!(
        store.read_glyph(5, 0).unwrap_err(),
        BitFontError::FontOutOfRange { font_id: 5, font_count: 2 }
    );
}

#[test]
fn test_write_glyph_keeps_baseline() {
    let mut store = create_test_store();
    store.write_glyph(FONT_8X8, 65, &[0xFF; 8]).unwrap();

    assert_eq!(store.read_glyph(FONT_8X8, 65).unwrap(), &[0xFF; 8]);
    assert_eq!(store.read_baseline(FONT_8X8, 65).unwrap(), &GLYPH_A);
    assert!(store.is_modified(FONT_8X8, 65).unwrap());
    assert!(!store.is_modified(FONT_8X8, 66).unwrap());
}

#[test]
fn test_write_glyph_does_not_touch_neighbours() {
    let mut store = create_test_store();
    store.write_glyph(FONT_5X8, 10, &[0xF8; 8]).unwrap();
    assert_eq!(store.read_glyph(FONT_5X8, 9).unwrap(), &[0; 8]);
    assert_eq!(store.read_glyph(FONT_5X8, 11).unwrap(), &[0; 8]);
}

#[test]
fn test_write_glyph_wrong_length() {
    let mut store = create_test_store();
    let result = store.write_glyph(FONT_8X8, 65, &[0xFF; 7]);
    assert!(matches!(result, Err(BitFontError::ShapeMismatch { .. })));
    assert_eq!(store.read_glyph(FONT_8X8, 65).unwrap(), &GLYPH_A);
}

#[test]
fn test_write_rows_keeps_padding() {
    let mut store = GlyphStore::new();
    let def = FontDefinition::with_layout("Padded", 8, 4, 6).unwrap();
    let mut data = vec![0u8; def.buffer_len()];
    data[6..12].copy_from_slice(&[1, 2, 3, 4, 0xAA, 0xBB]);
    let id = store.add_font(def, data).unwrap();

    store.write_rows(id, 1, &[9, 9, 9, 9]).unwrap();
    assert_eq!(store.read_glyph(id, 1).unwrap(), &[9, 9, 9, 9, 0xAA, 0xBB]);
}

#[test]
fn test_add_font_checks_data_length() {
    let mut store = GlyphStore::new();
    let def = FontDefinition::new("Short", 8, 8).unwrap();
    assert!(matches!(store.add_font(def, vec![0; 100]), Err(BitFontError::ShapeMismatch { .. })));
    assert_eq!(store.font_count(), 0);
}

#[test]
fn test_font_definitions_from_toml() {
    let def: FontDefinition = toml::from_str("name = \"Tiny\"\nwidth = 4\nheight = 6\nbytes_per_char = 6\n").unwrap();
    def.validate().unwrap();
    assert_eq!(def.glyph_count(), 128);

    let mut store = GlyphStore::new();
    store.add_blank_font(def).unwrap();
    let names: Vec<&str> = store.fonts().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Tiny"]);
}

#[test]
fn test_wide_fonts_are_rejected() {
    let err = FontDefinition::new("Wide", 10, 8).unwrap_err();
    assert!(matches!(err, BitFontError::ShapeMismatch { .. }));

    // a definition read from a file bypasses `new`, registering it must fail too
    let def: FontDefinition = toml::from_str("name = \"Wide10x8\"\nwidth = 10\nheight = 8\nbytes_per_char = 16\n").unwrap();
    assert!(def.validate().is_err());

    let mut store = GlyphStore::new();
    assert!(matches!(store.add_blank_font(def), Err(BitFontError::ShapeMismatch { .. })));
    assert_eq!(store.font_count(), 0);
}
