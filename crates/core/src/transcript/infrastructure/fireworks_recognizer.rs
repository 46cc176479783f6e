use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::shared::constants::{
    FIREWORKS_DISPLAY_NAME, MIN_REQUEST_TIMEOUT_SECS, REQUEST_TIMEOUT_MARGIN_SECS,
    UPLOAD_MB_PER_MINUTE,
};
use crate::shared::settings::Settings;
use crate::transcript::domain::speech_recognizer::{SpeechRecognizer, TranscribeError};
use crate::transcript::domain::transcript::{Segment, Transcript, Word};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Speech recognizer backed by the Fireworks AI Whisper endpoint
/// (OpenAI-compatible `audio/transcriptions`, `verbose_json` responses).
pub struct FireworksRecognizer {
    client: Client,
    endpoint: String,
    model: String,
    vad_model: String,
    api_key: String,
}

impl FireworksRecognizer {
    pub fn new(endpoint: &str, model: &str, vad_model: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim().to_string(),
            model: model.to_string(),
            vad_model: vad_model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings, api_key: &str) -> Self {
        Self::new(
            &settings.endpoint,
            &settings.model,
            &settings.vad_model,
            api_key,
        )
    }

    fn request_error(&self, source: reqwest::Error) -> TranscribeError {
        TranscribeError::Request {
            url: self.endpoint.clone(),
            source,
        }
    }
}

impl SpeechRecognizer for FireworksRecognizer {
    fn name(&self) -> &str {
        FIREWORKS_DISPLAY_NAME
    }

    fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscribeError> {
        let read_error = |source| TranscribeError::ReadAudio {
            path: audio_path.to_path_buf(),
            source,
        };
        let file = File::open(audio_path).map_err(read_error)?;
        let size = file.metadata().map_err(read_error)?.len();
        let file_name = audio_file_name(audio_path);

        let timeout = request_timeout(size);
        log::debug!(
            "Uploading {size} bytes to {} (timeout {}s)",
            self.endpoint,
            timeout.as_secs()
        );

        let audio = Part::reader_with_length(file, size)
            .file_name(file_name.clone())
            .mime_str("audio/wav")
            .map_err(|e| self.request_error(e))?;
        let form = Form::new()
            .part("file", audio)
            .text("model", self.model.clone())
            .text("temperature", "0")
            .text("vad_model", self.vad_model.clone())
            .text("response_format", "verbose_json");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(timeout)
            .send()
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        log::debug!("Transcription endpoint answered {status}");
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_else(|e| {
                log::debug!("Could not read error body from {}: {e}", self.endpoint);
                String::new()
            });
            return Err(TranscribeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().map_err(|e| self.request_error(e))?;
        parse_response(&body, &file_name)
    }
}

/// Upload budget scaled with file size: `max(120, trunc(mb / 10 * 60) + 60)` seconds.
///
/// Assumes at least 10 MB/min of combined upload and server-side throughput.
pub fn request_timeout(file_size_bytes: u64) -> Duration {
    let size_mb = file_size_bytes as f64 / BYTES_PER_MB;
    let scaled = (size_mb / UPLOAD_MB_PER_MINUTE * 60.0) as u64 + REQUEST_TIMEOUT_MARGIN_SECS;
    Duration::from_secs(scaled.max(MIN_REQUEST_TIMEOUT_SECS))
}

/// Parse a `verbose_json` body into a [`Transcript`].
///
/// Every field is optional upstream; absent or null values fall back to
/// defaults instead of failing. Segment text is trimmed, word text is not.
pub fn parse_response(body: &str, audio_file: &str) -> Result<Transcript, TranscribeError> {
    let response: ApiResponse = serde_json::from_str(body).map_err(TranscribeError::Decode)?;
    Ok(response.into_transcript(audio_file))
}

fn audio_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio.wav".to_string())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiResponse {
    language: Option<String>,
    duration: Option<f64>,
    segments: Option<Vec<ApiSegment>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSegment {
    start: Option<f64>,
    end: Option<f64>,
    text: Option<String>,
    words: Option<Vec<ApiWord>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiWord {
    word: Option<String>,
    start: Option<f64>,
    end: Option<f64>,
}

impl ApiResponse {
    fn into_transcript(self, audio_file: &str) -> Transcript {
        let segments = self
            .segments
            .unwrap_or_default()
            .into_iter()
            .map(ApiSegment::into_segment)
            .collect();
        Transcript::new(
            audio_file.to_string(),
            self.language.unwrap_or_else(|| "en".to_string()),
            self.duration.unwrap_or(0.0),
            segments,
        )
    }
}

impl ApiSegment {
    fn into_segment(self) -> Segment {
        Segment {
            start: self.start.unwrap_or(0.0),
            end: self.end.unwrap_or(0.0),
            text: self.text.unwrap_or_default().trim().to_string(),
            words: self
                .words
                .map(|words| words.into_iter().map(ApiWord::into_word).collect()),
        }
    }
}

impl ApiWord {
    fn into_word(self) -> Word {
        Word {
            word: self.word.unwrap_or_default(),
            start: self.start.unwrap_or(0.0),
            end: self.end.unwrap_or(0.0),
        }
    }
}
