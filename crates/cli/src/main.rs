use std::env;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use vidscribe_core::audio::domain::audio_extractor::AudioExtractor;
use vidscribe_core::audio::infrastructure::ffmpeg_cli_extractor::FfmpegCliExtractor;
use vidscribe_core::pipeline::pipeline_logger::ConsolePipelineLogger;
use vidscribe_core::pipeline::transcribe_video_use_case::{
    TranscribeVideoUseCase, TranscriptionRequest,
};
use vidscribe_core::shared::constants::API_KEY_ENV;
use vidscribe_core::shared::media_paths::default_transcript_path;
use vidscribe_core::shared::settings::Settings;
use vidscribe_core::transcript::domain::transcript_renderer::render_transcript;
use vidscribe_core::transcript::infrastructure::fireworks_recognizer::FireworksRecognizer;

/// Transcribe video files using Fireworks AI Whisper-v3.
#[derive(Parser, Debug)]
#[command(
    name = "vidscribe",
    version,
    after_help = "Requires: FFmpeg installed, FIREWORKS_API_KEY env variable set."
)]
struct Cli {
    /// Path to the video file to transcribe.
    video: PathBuf,

    /// Output path for JSON transcript (default: <video_name>_transcript.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the extracted WAV file instead of deleting it.
    #[arg(long)]
    keep_audio: bool,

    /// Settings file (default: <config dir>/vidscribe/settings.json).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let video = validate_video(&cli.video)?;
    let api_key = require_api_key(env::var(API_KEY_ENV).ok())?;
    let settings = Settings::load(cli.config.as_deref());
    log::debug!("Using settings: {settings:?}");

    let extractor = FfmpegCliExtractor::new(&settings.transcoder);
    if let Err(e) = extractor.check_available() {
        log::debug!("Transcoder check failed: {e}");
        return Err(transcoder_missing(extractor.binary()).into());
    }

    let output = match cli.output {
        Some(path) => absolutize(&path)?,
        None => default_transcript_path(&video),
    };

    let recognizer = FireworksRecognizer::from_settings(&settings, &api_key);
    let mut use_case = TranscribeVideoUseCase::new(
        Box::new(extractor),
        Box::new(recognizer),
        Box::new(ConsolePipelineLogger::new()),
    );
    let outcome = use_case.execute(&TranscriptionRequest {
        video,
        output,
        keep_audio: cli.keep_audio,
    })?;

    if let Some(audio) = &outcome.kept_audio {
        log::info!("Kept extracted audio at {}", audio.display());
    }
    print!("{}", render_transcript(&outcome.transcript));
    Ok(())
}

fn validate_video(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("Video file not found: {}", absolutize(path)?.display()).into());
    }
    Ok(path.canonicalize()?)
}

fn require_api_key(value: Option<String>) -> Result<String, String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(format!(
            "{API_KEY_ENV} environment variable not set.\n\
             Get a key at https://fireworks.ai and run:\n  \
             export {API_KEY_ENV}=\"your-key-here\""
        )),
    }
}

fn transcoder_missing(binary: &str) -> String {
    format!(
        "{binary} not found.\n\
         Install it:\n  \
         macOS:   brew install ffmpeg\n  \
         Ubuntu:  sudo apt install ffmpeg\n  \
         Windows: choco install ffmpeg"
    )
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
