pub mod speech_recognizer;
pub mod transcript;
pub mod transcript_renderer;
