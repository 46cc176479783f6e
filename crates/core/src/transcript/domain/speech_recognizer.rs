use std::path::{Path, PathBuf};

use thiserror::Error;

use super::transcript::Transcript;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("failed to read audio {path}: {source}")]
    ReadAudio {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("malformed transcription response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Domain interface for remote speech-to-text.
///
/// Implementations upload a 16 kHz mono WAV file and return the normalized
/// transcript. One attempt per call, no retries.
pub trait SpeechRecognizer {
    /// Short human-readable name used in status output.
    fn name(&self) -> &str;

    fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscribeError>;
}
