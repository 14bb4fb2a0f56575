use std::fmt::Display;

use crate::{BitFontError, Result};

/// Pixel state of one glyph, `height` rows × `width` columns.
///
/// Owns its rows; `clone()` is a deep copy, so snapshots kept in the undo
/// history never alias the matrix being edited.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelMatrix {
    width: usize,
    rows: Vec<Vec<bool>>,
}

impl PixelMatrix {
    /// All pixels off
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![false; width]; height],
        }
    }

    /// Build a matrix from explicit rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(BitFontError::shape_mismatch(format!("row {y} has {} pixels, expected {width}", row.len())));
        }
        Ok(Self { width, rows })
    }

    /// Rows are known to be `width` long.
    pub(crate) fn from_rows_unchecked(width: usize, rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self { width, rows }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.rows.len())
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set a pixel, returns the previous value.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<bool> {
        self.check_bounds(row, col)?;
        let old = self.rows[row][col];
        self.rows[row][col] = value;
        Ok(old)
    }

    /// Flip a pixel, returns the new value.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        let value = !self.rows[row][col];
        self.rows[row][col] = value;
        Ok(value)
    }

    pub fn count_set(&self) -> usize {
        self.rows.iter().flatten().filter(|&&p| p).count()
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.height() || col >= self.width {
            return Err(BitFontError::PixelOutOfRange {
                row,
                col,
                width: self.width,
                height: self.height(),
            });
        }
        Ok(())
    }
}

impl Display for PixelMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            write!(f, "{y:2} ")?;
            for &pixel in row {
                write!(f, "{}", if pixel { '#' } else { '-' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
