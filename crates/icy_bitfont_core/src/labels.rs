//! Labels and picker grouping for the 128 glyph codes

use crate::GLYPH_COUNT;

pub const FIRST_PRINTABLE: usize = 32;
pub const SPACE: usize = 32;
pub const DEL: usize = 127;

/// Label used after each glyph in the C source export
pub fn export_label(code: usize) -> String {
    match code {
        c if c < FIRST_PRINTABLE => format!("{c}: (Control)"),
        SPACE => format!("{SPACE}: ' ' (space)"),
        DEL => format!("{DEL}: DEL"),
        c => format!("{c}: '{}'", printable(c)),
    }
}

/// Short text for a glyph picker entry
pub fn picker_label(code: usize) -> String {
    match code {
        c if c < FIRST_PRINTABLE => "(Control)".to_string(),
        SPACE => "(Space)".to_string(),
        DEL => "(DEL)".to_string(),
        c => printable(c).to_string(),
    }
}

/// Tooltip style title: code and label
pub fn grid_title(code: usize) -> String {
    match code {
        c if c < FIRST_PRINTABLE || c == SPACE || c == DEL => format!("{c}: {}", picker_label(c)),
        c => format!("{c}: '{}'", printable(c)),
    }
}

fn printable(code: usize) -> char {
    u8::try_from(code).map_or(char::REPLACEMENT_CHARACTER, char::from)
}

/// Groups of the glyph picker, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphGroup {
    Control,
    NumbersAndSymbols,
    Uppercase,
    Lowercase,
    Special,
}

impl GlyphGroup {
    pub const ALL: [GlyphGroup; 5] = [
        GlyphGroup::Control,
        GlyphGroup::NumbersAndSymbols,
        GlyphGroup::Uppercase,
        GlyphGroup::Lowercase,
        GlyphGroup::Special,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GlyphGroup::Control => "Control Characters",
            GlyphGroup::NumbersAndSymbols => "Numbers & Symbols",
            GlyphGroup::Uppercase => "Uppercase",
            GlyphGroup::Lowercase => "Lowercase",
            GlyphGroup::Special => "Special Characters",
        }
    }

    /// Codes in this group, in the order the picker shows them
    pub fn codes(&self) -> Vec<usize> {
        match self {
            GlyphGroup::Control => (0..32).collect(),
            GlyphGroup::NumbersAndSymbols => (32..=64).collect(),
            GlyphGroup::Uppercase => (65..=90).collect(),
            GlyphGroup::Lowercase => (97..=122).collect(),
            GlyphGroup::Special => (91..=96).chain(123..=126).chain(std::iter::once(DEL)).collect(),
        }
    }

    pub fn of(code: usize) -> Option<GlyphGroup> {
        if code >= GLYPH_COUNT {
            return None;
        }
        GlyphGroup::ALL.into_iter().find(|group| group.codes().contains(&code))
    }
}
