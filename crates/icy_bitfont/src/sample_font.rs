use icy_bitfont_core::FontDefinition;

/// Rows of the glyphs fonts start with, MSB is the leftmost pixel.
/// Codes not listed start blank.
const SAMPLE_GLYPHS: &[(u8, [u8; 8])] = &[
    (b'0', [0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x66, 0x3C]),
    (b'1', [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E]),
    (b'2', [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E]),
    (b'3', [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x06, 0x66, 0x3C]),
    (b'4', [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x0C]),
    (b'5', [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x06, 0x66, 0x3C]),
    (b'6', [0x3C, 0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C]),
    (b'7', [0x7E, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x18, 0x18]),
    (b'8', [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x66, 0x3C]),
    (b'9', [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x06, 0x3C]),
    (b'A', [0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66]),
    (b'B', [0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x66, 0x7C]),
    (b'C', [0x3C, 0x66, 0x60, 0x60, 0x60, 0x60, 0x66, 0x3C]),
    (b'D', [0x78, 0x6C, 0x66, 0x66, 0x66, 0x66, 0x6C, 0x78]),
    (b'E', [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x7E]),
    (b'F', [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x60]),
    (b'G', [0x3C, 0x66, 0x60, 0x60, 0x6E, 0x66, 0x66, 0x3E]),
    (b'H', [0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x66]),
    (b'I', [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C]),
    (b'J', [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x6C, 0x38]),
    (b'K', [0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x66]),
    (b'L', [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E]),
    (b'M', [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x63]),
    (b'N', [0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x66]),
    (b'O', [0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C]),
    (b'P', [0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x60]),
    (b'Q', [0x3C, 0x66, 0x66, 0x66, 0x66, 0x6E, 0x3C, 0x0E]),
    (b'R', [0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x66]),
    (b'S', [0x3C, 0x66, 0x60, 0x3C, 0x06, 0x06, 0x66, 0x3C]),
    (b'T', [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18]),
    (b'U', [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C]),
    (b'V', [0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x3C, 0x18]),
    (b'W', [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x63]),
    (b'X', [0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x66]),
    (b'Y', [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x18]),
    (b'Z', [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x60, 0x7E]),
];

/// Glyph buffer for `def` with the sample glyphs in place.
///
/// Each glyph gets up to `height` sample rows at the start of its slot, cut to
/// the columns the font shows. Padding bytes stay zero.
pub fn sample_font_data(def: &FontDefinition) -> Vec<u8> {
    let mut data = vec![0; def.buffer_len()];
    let mask = column_mask(def.width);
    for &(code, rows) in SAMPLE_GLYPHS {
        let start = usize::from(code) * def.bytes_per_char;
        for (y, row) in rows.iter().take(def.height).enumerate() {
            if let Some(byte) = data.get_mut(start + y) {
                *byte = row & mask;
            }
        }
    }
    data
}

fn column_mask(width: usize) -> u8 {
    if width >= 8 {
        0xFF
    } else {
        !(0xFFu8 >> width)
    }
}
