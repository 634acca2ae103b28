//! Configuration loading
//!
//! Reads `~/.config/qaia/config.toml`. Every field is optional and falls back
//! to the built-in hover, matcher and tooltip constants.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::QaiaError;

pub use types::{
    Config, DEFAULT_HOVER_DELAY_MS, DEFAULT_MIN_SCORE, DEFAULT_MIN_TEXT_CHARS, DEFAULT_OFFSET_X,
    DEFAULT_OFFSET_Y, DEFAULT_PADDING, DEFAULT_QUESTION_BONUS, DEFAULT_REVERSE_CONTAINMENT_WEIGHT,
    HoverConfig, MatcherConfig, ModifierKey, TooltipConfig,
};

const CONFIG_DIR: &str = "qaia";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the default config file, falling back to defaults on any problem
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

/// Load a config file that the user named explicitly
pub fn load_config_from_path(path: &Path) -> Result<Config, QaiaError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map_err(|message| QaiaError::Config {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.to_string())
}
