use icy_bitfont_core::{FontDefinition, MAX_HISTORY};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const APP_NAME: &str = "icy_bitfont";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// Undo steps kept per glyph
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Fonts offered for editing
    #[serde(default = "default_fonts")]
    pub fonts: Vec<FontDefinition>,

    /// Start fonts with the built-in digits and capital letters instead of blank glyphs
    #[serde(default = "default_sample_glyphs")]
    pub sample_glyphs: bool,
}

fn default_sample_glyphs() -> bool {
    true
}

fn default_max_history() -> usize {
    MAX_HISTORY
}

fn default_fonts() -> Vec<FontDefinition> {
    [("Sample8x8", 8, 8), ("Test5x8", 5, 8), ("Tall8x16", 8, 16)]
        .into_iter()
        .filter_map(|(name, width, height)| FontDefinition::new(name, width, height).ok())
        .collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            fonts: default_fonts(),
            sample_glyphs: default_sample_glyphs(),
        }
    }
}

impl Options {
    /// Load options from `path`, or from the configuration directory if `path` is `None`.
    ///
    /// Missing or unreadable files fall back to the defaults.
    pub fn load_options(path: Option<&Path>) -> Self {
        let options_file = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::get_options_file() {
                Some(file) => file,
                None => return Self::default(),
            },
        };
        if !options_file.exists() {
            return Self::default();
        }
        match fs::read_to_string(&options_file) {
            Ok(txt) => match toml::from_str(&txt) {
                Ok(result) => return result,
                Err(err) => log::error!("Error parsing options file {}: {}", options_file.display(), err),
            },
            Err(err) => log::error!("Error reading options file: {}", err),
        }
        Self::default()
    }

    pub fn store_options(&self, path: Option<&Path>) {
        let Some(file_name) = path.map(Path::to_path_buf).or_else(Self::get_options_file) else {
            return;
        };
        match toml::to_string(self) {
            Ok(text) => {
                if let Err(err) = fs::write(file_name, text) {
                    log::error!("Error writing options file: {}", err);
                }
            }
            Err(err) => log::error!("Error writing options file: {}", err),
        }
    }

    /// Returns the configuration directory path, creating it if needed
    pub fn get_config_dir() -> Option<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "GitHub", APP_NAME)?;
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            log::error!("Can't create configuration directory {:?}", dir);
            return None;
        }
        Some(dir)
    }

    pub fn get_options_file() -> Option<PathBuf> {
        Self::get_config_dir().map(|dir| dir.join("options.toml"))
    }

    /// Returns the log directory path
    pub fn get_log_dir() -> Option<PathBuf> {
        Self::get_config_dir()
    }
}
