use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{
    FIREWORKS_MODEL, FIREWORKS_VAD_MODEL, FIREWORKS_WHISPER_URL, TRANSCODER_BINARY,
};

/// User-tunable settings. The API key is never read from here, only from
/// the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub model: String,
    pub vad_model: String,
    pub transcoder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: FIREWORKS_WHISPER_URL.to_string(),
            model: FIREWORKS_MODEL.to_string(),
            vad_model: FIREWORKS_VAD_MODEL.to_string(),
            transcoder: TRANSCODER_BINARY.to_string(),
        }
    }
}

impl Settings {
    /// `<config_dir>/vidscribe/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vidscribe").join("settings.json"))
    }

    /// Load from `path`, or from [`Settings::default_path`] when `None`.
    /// A missing or malformed file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };
        path.and_then(|p| Self::read(&p)).unwrap_or_default()
    }

    fn read(path: &Path) -> Option<Self> {
        let json = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings at {}: {e}", path.display());
                None
            }
        }
    }
}
