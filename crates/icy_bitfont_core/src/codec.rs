//! Conversion between packed glyph bytes and pixel matrices.
//!
//! One byte per row, most significant bit is the leftmost pixel. Fonts are at
//! most 8 pixels wide, see `FontDefinition::validate`.

use crate::PixelMatrix;

/// Columns addressable in a single row byte
pub const ROW_BITS: usize = 8;

/// Decode a glyph slice into a `height` × `width` matrix. Missing row bytes read as 0.
pub fn decode(bytes: &[u8], width: usize, height: usize) -> PixelMatrix {
    let mut rows = Vec::with_capacity(height);
    for y in 0..height {
        let byte = bytes.get(y).copied().unwrap_or(0);
        let row = (0..width).map(|x| x < ROW_BITS && byte & (0x80 >> x) != 0).collect();
        rows.push(row);
    }
    PixelMatrix::from_rows_unchecked(width, rows)
}

/// Encode a matrix back into exactly `matrix.height()` row bytes.
pub fn encode(matrix: &PixelMatrix) -> Vec<u8> {
    matrix
        .rows()
        .iter()
        .map(|row| {
            let mut byte = 0u8;
            for (x, &pixel) in row.iter().enumerate().take(ROW_BITS) {
                if pixel {
                    byte |= 1 << (7 - x);
                }
            }
            byte
        })
        .collect()
}
