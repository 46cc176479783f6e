use std::path::{Path, PathBuf};

use super::constants::TRANSCRIPT_SUFFIX;

/// `<dir>/<stem>_transcript.json` beside the source video.
pub fn default_transcript_path(video: &Path) -> PathBuf {
    sibling_with_stem(video, TRANSCRIPT_SUFFIX)
}

/// `<dir>/<stem>.wav` beside the source video, used when the audio is kept.
pub fn kept_audio_path(video: &Path) -> PathBuf {
    sibling_with_stem(video, ".wav")
}

/// File name for the extracted audio inside a scratch directory.
pub fn audio_file_name(video: &Path) -> String {
    format!("{}.wav", stem(video))
}

fn sibling_with_stem(video: &Path, suffix: &str) -> PathBuf {
    let name = format!("{}{suffix}", stem(video));
    match video.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn stem(video: &Path) -> String {
    video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string())
}
