use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::audio::domain::audio_extractor::{AudioExtractor, ExtractError};
use crate::shared::constants::{TRANSCODER_BINARY, WAV_CHANNELS, WAV_CODEC, WAV_SAMPLE_RATE};

/// Extracts audio by running the `ffmpeg` executable as a subprocess.
///
/// The subprocess has no timeout; it runs until ffmpeg exits.
#[derive(Debug, Clone)]
pub struct FfmpegCliExtractor {
    binary: String,
}

impl FfmpegCliExtractor {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn run(&self, args: &[OsString]) -> Result<Output, ExtractError> {
        log::debug!("Running {} {:?}", self.binary, args);
        Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| ExtractError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })
    }

    fn failure(&self, output: &Output) -> ExtractError {
        ExtractError::Failed {
            binary: self.binary.clone(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        }
    }
}

impl Default for FfmpegCliExtractor {
    fn default() -> Self {
        Self::new(TRANSCODER_BINARY)
    }
}

impl AudioExtractor for FfmpegCliExtractor {
    fn check_available(&self) -> Result<(), ExtractError> {
        let output = self.run(&[OsString::from("-version")])?;
        if !output.status.success() {
            return Err(self.failure(&output));
        }
        Ok(())
    }

    fn extract(&self, input: &Path, output_path: &Path) -> Result<PathBuf, ExtractError> {
        let output = self.run(&extract_args(input, output_path))?;
        if !output.status.success() {
            return Err(self.failure(&output));
        }
        Ok(output_path.to_path_buf())
    }
}

/// `-y -i <input> -vn -acodec pcm_s16le -ar 16000 -ac 1 <output>`
pub fn extract_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        input.as_os_str().to_os_string(),
        "-vn".into(),
        "-acodec".into(),
        WAV_CODEC.into(),
        "-ar".into(),
        WAV_SAMPLE_RATE.to_string().into(),
        "-ac".into(),
        WAV_CHANNELS.to_string().into(),
        output.as_os_str().to_os_string(),
    ]
}
