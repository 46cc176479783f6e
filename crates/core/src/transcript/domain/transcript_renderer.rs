use super::transcript::{Segment, Transcript};
use crate::shared::timestamp::format_timestamp;

const RULE_WIDTH: usize = 60;

/// `[0m00s -> 0m15s]  text`
pub fn segment_line(segment: &Segment) -> String {
    format!(
        "[{} -> {}]  {}",
        format_timestamp(segment.start),
        format_timestamp(segment.end),
        segment.text
    )
}

/// Human-readable rendering: a banner with duration, language and segment
/// count, one line per segment, then a closing rule.
pub fn render_transcript(transcript: &Transcript) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "TRANSCRIPT".to_string(),
        format!(
            "Duration: {}  |  Language: {}",
            format_timestamp(transcript.duration()),
            transcript.language()
        ),
        format!("Segments: {}", transcript.segment_count()),
        rule.clone(),
        String::new(),
    ];
    lines.extend(transcript.segments().iter().map(segment_line));
    lines.push(String::new());
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
