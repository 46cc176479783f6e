use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tempfile::TempDir;
use thiserror::Error;

use crate::audio::domain::audio_extractor::{AudioExtractor, ExtractError};
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::media_paths::{audio_file_name, kept_audio_path};
use crate::shared::timestamp::format_timestamp;
use crate::transcript::domain::speech_recognizer::{SpeechRecognizer, TranscribeError};
use crate::transcript::domain::transcript::Transcript;
use crate::transcript::infrastructure::json_transcript_writer::{
    write_transcript, TranscriptWriteError,
};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Transcribe(#[from] TranscribeError),
    #[error(transparent)]
    Write(#[from] TranscriptWriteError),
}

/// What to transcribe and where the results go.
#[derive(Clone, Debug)]
pub struct TranscriptionRequest {
    pub video: PathBuf,
    pub output: PathBuf,
    /// Keep the WAV beside the video instead of a scratch directory.
    pub keep_audio: bool,
}

#[derive(Debug)]
pub struct TranscriptionOutcome {
    pub transcript: Transcript,
    pub output: PathBuf,
    /// Where the WAV was left, if it was kept.
    pub kept_audio: Option<PathBuf>,
}

/// Extract audio, transcribe it remotely and save the transcript as JSON.
///
/// Without `keep_audio` the WAV lives in a temporary directory that is
/// removed when this returns, whether the run succeeded or failed.
pub struct TranscribeVideoUseCase {
    extractor: Box<dyn AudioExtractor>,
    recognizer: Box<dyn SpeechRecognizer>,
    logger: Box<dyn PipelineLogger>,
}

impl TranscribeVideoUseCase {
    pub fn new(
        extractor: Box<dyn AudioExtractor>,
        recognizer: Box<dyn SpeechRecognizer>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            extractor,
            recognizer,
            logger,
        }
    }

    pub fn execute(
        &mut self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let (audio_path, scratch) = if request.keep_audio {
            (kept_audio_path(&request.video), None)
        } else {
            let dir = tempfile::Builder::new()
                .prefix("vidscribe-")
                .tempdir()
                .map_err(PipelineError::TempDir)?;
            let path = dir.path().join(audio_file_name(&request.video));
            (path, Some(dir))
        };

        let result = self.run_stages(request, &audio_path);
        discard_scratch(scratch);

        let transcript = result?;
        self.logger.summary();
        Ok(TranscriptionOutcome {
            transcript,
            output: request.output.clone(),
            kept_audio: request.keep_audio.then_some(audio_path),
        })
    }

    fn run_stages(
        &mut self,
        request: &TranscriptionRequest,
        audio_path: &Path,
    ) -> Result<Transcript, PipelineError> {
        let audio = self.extract(&request.video, audio_path)?;
        let transcript = self.transcribe(&audio)?;

        let started = Instant::now();
        write_transcript(&request.output, &transcript)?;
        self.logger.timing("write", elapsed_ms(started));
        self.logger.info(&format!(
            "Transcript saved to: {}",
            request.output.display()
        ));
        Ok(transcript)
    }

    fn extract(&mut self, video: &Path, audio_path: &Path) -> Result<PathBuf, PipelineError> {
        self.logger
            .info(&format!("Extracting audio from {}...", display_name(video)));

        let started = Instant::now();
        let audio = self.extractor.extract(video, audio_path)?;
        self.logger.timing("extract", elapsed_ms(started));

        let size = fs::metadata(&audio)
            .map_err(|e| ExtractError::Output {
                path: audio.clone(),
                source: e,
            })?
            .len();
        self.logger.info(&format!(
            "Audio extracted: {} ({:.1} MB)",
            display_name(&audio),
            size as f64 / (1024.0 * 1024.0)
        ));
        Ok(audio)
    }

    fn transcribe(&mut self, audio: &Path) -> Result<Transcript, PipelineError> {
        self.logger.info(&format!(
            "Transcribing {} via {}...",
            display_name(audio),
            self.recognizer.name()
        ));
        self.logger
            .info("(This may take several minutes for long recordings.)");

        let started = Instant::now();
        let transcript = self.recognizer.transcribe(audio)?;
        self.logger.timing("transcribe", elapsed_ms(started));

        self.logger.info(&format!(
            "Transcription complete: {} segments, {} duration",
            transcript.segment_count(),
            format_timestamp(transcript.duration())
        ));
        Ok(transcript)
    }
}

fn discard_scratch(scratch: Option<TempDir>) {
    if let Some(dir) = scratch {
        let path = dir.path().to_path_buf();
        if let Err(e) = dir.close() {
            log::warn!("Failed to remove {}: {e}", path.display());
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
