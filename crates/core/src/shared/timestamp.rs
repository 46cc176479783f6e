/// Format seconds as a compact timestamp: `12m34s`, or `1h02m03s` past the hour.
///
/// Fractional seconds are truncated, not rounded. Negative and non-finite
/// values are treated as zero.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m{secs:02}s")
    } else {
        format!("{minutes}m{secs:02}s")
    }
}
