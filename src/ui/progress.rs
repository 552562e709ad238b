//! Progress formatting helpers.

use std::time::Duration;

/// Format a step duration for display.
///
/// Steps of this pipeline run from milliseconds to several minutes, so
/// anything past a minute is shown as minutes and whole seconds.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let whole = d.as_secs();
        format!("{}m {:02}s", whole / 60, whole % 60)
    }
}
