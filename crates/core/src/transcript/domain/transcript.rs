use serde::{Deserialize, Serialize};

/// A single timed token within a segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl Word {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A contiguous interval of recognized speech.
///
/// `words` is `None` when the recognizer returned no word timing for this
/// segment, and is then left out of the JSON entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

impl Segment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The transcript of one audio file, segments in the order the recognizer
/// returned them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    audio_file: String,
    language: String,
    duration: f64,
    segments: Vec<Segment>,
}

impl Transcript {
    pub fn new(
        audio_file: String,
        language: String,
        duration: f64,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            audio_file,
            language,
            duration,
            segments,
        }
    }

    pub fn audio_file(&self) -> &str {
        &self.audio_file
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
