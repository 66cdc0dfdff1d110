//! Human-readable time formatting.

/// Format seconds as `MM:SS.mmm`, with a leading `-` for negative times.
///
/// Minutes are not wrapped into hours, so long media reads `75:00.000`.
///
/// # Arguments
/// * `seconds` - Time in seconds
///
/// # Returns
/// A string in MM:SS.mmm format
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--.---".to_string();
    }
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total_millis = (seconds.abs() * 1000.0).round() as u64;
    let mins = total_millis / 60_000;
    let secs = (total_millis / 1000) % 60;
    let millis = total_millis % 1000;
    format!("{}{:02}:{:02}.{:03}", sign, mins, secs, millis)
}
