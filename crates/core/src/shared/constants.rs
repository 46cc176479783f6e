pub const FIREWORKS_WHISPER_URL: &str =
    "https://audio-prod.api.fireworks.ai/v1/audio/transcriptions";
pub const FIREWORKS_MODEL: &str = "whisper-v3";
pub const FIREWORKS_VAD_MODEL: &str = "silero";
/// Shown in status output; the model id sent upstream comes from settings.
pub const FIREWORKS_DISPLAY_NAME: &str = "Fireworks AI Whisper-v3";

/// Environment variable holding the bearer credential for the recognition service.
pub const API_KEY_ENV: &str = "FIREWORKS_API_KEY";

pub const TRANSCODER_BINARY: &str = "ffmpeg";

/// The recognizer only accepts 16-bit PCM, 16 kHz, mono.
pub const WAV_CODEC: &str = "pcm_s16le";
pub const WAV_SAMPLE_RATE: u32 = 16000;
pub const WAV_CHANNELS: u16 = 1;

/// Floor for the upload timeout, in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 120;
/// Assumed worst-case throughput used to scale the timeout with file size.
pub const UPLOAD_MB_PER_MINUTE: f64 = 10.0;
/// Added on top of the size-scaled estimate, in seconds.
pub const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 60;

pub const TRANSCRIPT_SUFFIX: &str = "_transcript.json";
