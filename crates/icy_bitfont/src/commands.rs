use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use icy_bitfont_core::GLYPH_COUNT;

pub const HELP: &str = "\
Commands:
  fonts                     list fonts
  groups                    list glyph codes by group
  font N                    edit font N (starting at 0)
  glyph N | 'c'             edit glyph by code or character
  toggle ROW COL [on|off]   flip a pixel or set it
  stroke ROW COL [ROW COL]  paint a stroke, one undo step
  undo | redo               step through the history
  reset                     restore the glyph as loaded
  show                      print the glyph
  hex                       print the glyph bytes
  copy                      print the glyph bytes as one line
  export [PATH]             write the font as C source
  help                      show this text
  quit                      leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fonts,
    Groups,
    Font(usize),
    Glyph(usize),
    Toggle { row: usize, col: usize, value: Option<bool> },
    Stroke(Vec<(usize, usize)>),
    Undo,
    Redo,
    Reset,
    Show,
    Hex,
    Copy,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "fonts" => Command::Fonts,
            "groups" => Command::Groups,
            "font" => Command::Font(parse_number(single_arg(&args, "font")?)?),
            "glyph" | "char" => Command::Glyph(parse_glyph_code(rest)?),
            "toggle" | "t" => {
                let (row, col) = match args.as_slice() {
                    [row, col] | [row, col, _] => (parse_number(row)?, parse_number(col)?),
                    _ => bail!("usage: toggle ROW COL [on|off]"),
                };
                let value = match args.get(2) {
                    None => None,
                    Some(&"on" | &"1") => Some(true),
                    Some(&"off" | &"0") => Some(false),
                    Some(other) => bail!("expected 'on' or 'off', got '{other}'"),
                };
                Command::Toggle { row, col, value }
            }
            "stroke" => {
                if args.is_empty() || args.len() % 2 != 0 {
                    bail!("usage: stroke ROW COL [ROW COL ...]");
                }
                let points = args
                    .chunks(2)
                    .map(|pair| -> anyhow::Result<(usize, usize)> { Ok((parse_number(pair[0])?, parse_number(pair[1])?)) })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Command::Stroke(points)
            }
            "undo" | "u" => Command::Undo,
            "redo" | "r" => Command::Redo,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "hex" => Command::Hex,
            "copy" => Command::Copy,
            "export" => Command::Export(if rest.is_empty() { None } else { Some(PathBuf::from(rest)) }),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(Some(command))
    }
}

fn single_arg<'a>(args: &[&'a str], command: &str) -> anyhow::Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(anyhow!("usage: {command} N")),
    }
}

fn parse_number(arg: &str) -> anyhow::Result<usize> {
    arg.parse().with_context(|| format!("'{arg}' is not a number"))
}

/// Accepts a decimal code or a quoted character like `'A'`; codes outside 0..128 are rejected.
fn parse_glyph_code(arg: &str) -> anyhow::Result<usize> {
    let code = if let Some(inner) = arg.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        let mut chars = inner.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch as usize,
            _ => bail!("expected a single character, got {arg}"),
        }
    } else {
        parse_number(arg)?
    };
    if code >= GLYPH_COUNT {
        bail!("glyph code {code} out of range (0..{GLYPH_COUNT})");
    }
    Ok(code)
}
