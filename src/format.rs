//! Display-time helpers for the widget layer: clock and lap formatting plus
//! the minute-progress fraction behind the circular arc.

/// Splits milliseconds into (minutes, seconds, centiseconds) for the main
/// clock display.
pub fn clock_parts(ms: u64) -> (u64, u64, u64) {
    let total_secs = ms / 1000;
    (total_secs / 60, total_secs % 60, (ms % 1000) / 10)
}

/// Format milliseconds as "MM:SS.cc".
pub fn format_clock(ms: u64) -> String {
    let (m, s, cs) = clock_parts(ms);
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

/// Compact lap rendering: "S.cc", or "M:SS.cc" once minutes are involved.
pub fn format_lap(ms: u64) -> String {
    let (m, s, cs) = clock_parts(ms);
    if m > 0 {
        format!("{}:{:02}.{:02}", m, s, cs)
    } else {
        format!("{}.{:02}", s, cs)
    }
}

/// Fraction of the current minute in `[0, 1)`; the progress arc sweeps once
/// per minute.
pub fn minute_progress(ms: u64) -> f64 {
    (ms % 60_000) as f64 / 60_000.0
}
