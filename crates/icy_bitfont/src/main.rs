#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod commands;
mod options;
mod sample_font;
mod shell;

pub use options::*;

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(version, about = "Edit embedded bitmap fonts and export them as C arrays", long_about = None)]
pub struct Args {
    /// Read commands from this file instead of stdin
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Options file to use instead of the one in the configuration directory
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Font selected at startup
    #[arg(long, default_value_t = 0)]
    font: usize,

    /// Glyph code selected at startup
    #[arg(long, default_value_t = 65)]
    glyph: usize,

    /// Write the options in use back to the options file and exit
    #[arg(long, default_value_t = false)]
    write_options: bool,
}

fn start_logger(log_dir: &Path) -> Option<LoggerHandle> {
    let result = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(log_dir).basename("icy_bitfont").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    });
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = match Options::get_log_dir() {
        Some(log_dir) => start_logger(&log_dir),
        None => {
            eprintln!("Failed to create log file");
            None
        }
    };

    log::info!("Starting icy_bitfont {}", env!("CARGO_PKG_VERSION"));

    let options = Options::load_options(args.options.as_deref());
    if args.write_options {
        options.store_options(args.options.as_deref());
        return Ok(());
    }

    let mut shell = Shell::new(&options, io::stdout().lock());
    shell.select(args.font, args.glyph)?;

    match &args.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?;
            shell.run(BufReader::new(file))?;
        }
        None => shell.run(io::stdin().lock())?,
    }

    log::info!("Shutting down.");
    Ok(())
}
