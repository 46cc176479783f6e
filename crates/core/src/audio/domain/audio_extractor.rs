use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{binary} failed ({status}):\n{stderr}")]
    Failed {
        binary: String,
        status: String,
        stderr: String,
    },
    #[error("extracted audio missing at {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Domain interface for turning a media container into 16-bit PCM WAV,
/// 16 kHz, mono.
pub trait AudioExtractor {
    /// Confirm the underlying transcoder can be run at all.
    fn check_available(&self) -> Result<(), ExtractError>;

    /// Extract the audio track of `input` into `output`, overwriting it.
    /// Returns the path of the written WAV file.
    fn extract(&self, input: &Path, output: &Path) -> Result<PathBuf, ExtractError>;
}
