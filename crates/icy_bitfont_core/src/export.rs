//! Text export of glyph data
//!
//! - `format_glyph_hex` - annotated per-row listing for the data panel
//! - `format_glyph_bytes` - single line for the clipboard
//! - `format_font_source` - whole font as a C array

use std::fmt::Write;

use crate::{labels::export_label, GlyphStore, Result};

fn hex_byte(byte: u8) -> String {
    format!("0x{byte:02x}")
}

/// One line per byte: `0x18  // 00011000 --    **   `
pub fn format_glyph_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            let binary = format!("{byte:08b}");
            let visual: String = binary.chars().map(|c| if c == '1' { '*' } else { ' ' }).collect();
            format!("{}  // {binary} -- {visual}", hex_byte(byte))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma separated bytes with a trailing comma, ready to paste into an array.
pub fn format_glyph_bytes(bytes: &[u8]) -> String {
    let mut text = bytes.iter().map(|&b| hex_byte(b)).collect::<Vec<_>>().join(", ");
    text.push(',');
    text
}

/// File name the source export is offered under
pub fn source_file_name(font_id: usize) -> String {
    format!("embedded_font{}.c", font_id + 1)
}

/// Render all glyphs of a font as a C array, one labeled line per glyph.
///
/// The output only depends on the current glyph bytes of the font.
pub fn format_font_source(store: &GlyphStore, font_id: usize) -> Result<String> {
    let font = store.font(font_id)?;
    let mut output = String::new();
    let _ = writeln!(output, "// {}: {}x{} pixels per character", font.name, font.width, font.height);
    let _ = writeln!(output, "static const unsigned char embedded_font{}[] = {{", font_id + 1);

    for code in 0..font.glyph_count() {
        let bytes = store.read_glyph(font_id, code)?;
        let hex_values = bytes.iter().map(|&b| hex_byte(b)).collect::<Vec<_>>().join(", ");
        let _ = writeln!(output, "    {hex_values},  // {}", export_label(code));
    }

    output.push_str("};\n");
    Ok(output)
}
