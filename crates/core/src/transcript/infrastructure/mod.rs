pub mod fireworks_recognizer;
pub mod json_transcript_writer;
