use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::transcript::domain::transcript::Transcript;

#[derive(Error, Debug)]
pub enum TranscriptWriteError {
    #[error("failed to serialize transcript: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write transcript to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the transcript as indented JSON.
///
/// The document goes to a `.part` sibling first and is renamed into place,
/// so an interrupted write never leaves a truncated transcript at `path`.
pub fn write_transcript(path: &Path, transcript: &Transcript) -> Result<(), TranscriptWriteError> {
    let json = serde_json::to_string_pretty(transcript).map_err(TranscriptWriteError::Serialize)?;

    let temp_path = part_path(path);
    let mut file = fs::File::create(&temp_path).map_err(|e| write_error(&temp_path, e))?;
    if let Err(e) = file.write_all(json.as_bytes()).and_then(|_| file.flush()) {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(&temp_path, e));
    }
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        write_error(path, e)
    })
}

fn write_error(path: &Path, source: std::io::Error) -> TranscriptWriteError {
    TranscriptWriteError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
