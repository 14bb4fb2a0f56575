use std::{
    fs,
    io::{BufRead, Write},
    ops::ControlFlow,
    path::PathBuf,
};

use anyhow::Context;
use icy_bitfont_core::{
    export::source_file_name,
    labels::{picker_label, GlyphGroup},
    FontEditor, GlyphStore, GlyphUndoState, PixelMatrix,
};

use crate::{
    commands::{Command, HELP},
    sample_font, Options,
};

/// Line based front end for the font editor.
///
/// Failed commands are reported and the shell keeps running; only input or
/// output failures end it.
pub struct Shell<W: Write> {
    editor: FontEditor,
    out: W,
    /// Directory `export` writes to when no path is given
    export_dir: PathBuf,
}

impl<W: Write> Shell<W> {
    pub fn new(options: &Options, out: W) -> Self {
        let mut store = GlyphStore::new();
        for def in &options.fonts {
            let result = if options.sample_glyphs {
                store.add_font(def.clone(), sample_font::sample_font_data(def))
            } else {
                store.add_blank_font(def.clone())
            };
            if let Err(err) = result {
                log::error!("Skipping font '{}': {}", def.name, err);
            }
        }
        Self {
            editor: FontEditor::with_history_limit(store, options.max_history),
            out,
            export_dir: PathBuf::from("."),
        }
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn editor(&self) -> &FontEditor {
        &self.editor
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Select the glyph shown at startup.
    pub fn select(&mut self, font_id: usize, glyph_code: usize) -> anyhow::Result<()> {
        if let Err(err) = self.editor.load_glyph(font_id, glyph_code) {
            log::warn!("Can't select glyph {glyph_code} of font {font_id}: {err}");
            writeln!(self.out, "error: {err}")?;
            return Ok(());
        }
        self.print_glyph()
    }

    /// Execute commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    log::debug!("command: {command:?}");
                    if self.execute(command)?.is_break() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("Rejected input '{}': {err}", line.trim());
                    writeln!(self.out, "error: {err}")?;
                }
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> anyhow::Result<ControlFlow<()>> {
        match self.try_execute(command) {
            Ok(flow) => Ok(flow),
            Err(err) => {
                log::warn!("{err:#}");
                writeln!(self.out, "error: {err:#}")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn try_execute(&mut self, command: Command) -> anyhow::Result<ControlFlow<()>> {
        match command {
            Command::Fonts => {
                for (id, font) in self.editor.store().fonts().enumerate() {
                    let marker = if self.editor.font_id() == Some(id) { '*' } else { ' ' };
                    writeln!(
                        self.out,
                        "{marker}{id}: {} ({}x{}, {} bytes per char)",
                        font.name, font.width, font.height, font.bytes_per_char
                    )?;
                }
            }
            Command::Groups => {
                for group in GlyphGroup::ALL {
                    let labels: Vec<String> = group.codes().into_iter().map(|code| format!("{code}={}", picker_label(code))).collect();
                    writeln!(self.out, "{}: {}", group.title(), labels.join(" "))?;
                }
            }
            Command::Font(font_id) => {
                // keep the glyph, change the font
                let glyph_code = self.editor.glyph_code().unwrap_or(65);
                self.editor.load_glyph(font_id, glyph_code)?;
                self.print_glyph()?;
            }
            Command::Glyph(glyph_code) => {
                let font_id = self.editor.font_id().unwrap_or(0);
                self.editor.load_glyph(font_id, glyph_code)?;
                self.print_glyph()?;
            }
            Command::Toggle { row, col, value } => {
                self.editor.toggle_pixel(row, col, value)?;
                self.print_glyph()?;
            }
            Command::Stroke(points) => {
                let result = self.paint_stroke(&points);
                self.editor.end_stroke();
                result?;
                self.print_glyph()?;
            }
            Command::Undo => {
                if self.editor.undo()?.is_some() {
                    self.print_glyph()?;
                } else {
                    writeln!(self.out, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if self.editor.redo()?.is_some() {
                    self.print_glyph()?;
                } else {
                    writeln!(self.out, "nothing to redo")?;
                }
            }
            Command::Reset => {
                self.editor.reset_to_baseline()?;
                self.print_glyph()?;
            }
            Command::Show => self.print_glyph()?,
            Command::Hex => {
                let text = self.editor.hex_display()?;
                writeln!(self.out, "{text}")?;
            }
            Command::Copy => {
                let text = self.editor.clipboard_text()?;
                writeln!(self.out, "{text}")?;
            }
            Command::Export(path) => {
                let font_id = self.editor.font_id().unwrap_or(0);
                let source = self.editor.source_export(font_id)?;
                let path = path.unwrap_or_else(|| self.export_dir.join(source_file_name(font_id)));
                fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
                log::info!("Exported font {font_id} to {}", path.display());
                writeln!(self.out, "exported {}", path.display())?;
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn paint_stroke(&mut self, points: &[(usize, usize)]) -> icy_bitfont_core::Result<()> {
        let Some((&(row, col), rest)) = points.split_first() else {
            return Ok(());
        };
        self.editor.begin_stroke(row, col)?;
        for &(row, col) in rest {
            self.editor.continue_stroke(row, col)?;
        }
        Ok(())
    }

    fn print_glyph(&mut self) -> anyhow::Result<()> {
        let (Some(font_id), Some(code), Some(matrix)) = (self.editor.font_id(), self.editor.glyph_code(), self.editor.matrix()) else {
            return Ok(());
        };
        let font = self.editor.store().font(font_id)?;
        writeln!(
            self.out,
            "font {font_id} '{}', glyph {code} {} [undo {} / redo {}]",
            font.name,
            picker_label(code),
            self.editor.undo_stack_len(),
            self.editor.redo_stack_len()
        )?;
        write_matrix(&mut self.out, matrix)?;
        Ok(())
    }
}

fn write_matrix(out: &mut impl Write, matrix: &PixelMatrix) -> std::io::Result<()> {
    write!(out, "{matrix}")
}
