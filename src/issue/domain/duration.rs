//! Compact duration formatting for elapsed and turnaround displays.

use chrono::TimeDelta;

/// Formats a duration as `"Xd Yh Zm"`, omitting zero-valued units.
///
/// Zero and negative durations (a closed issue whose start and resolution
/// share an instant, or clock skew) render as `"0m"`, as does anything
/// under one minute. At least one unit is always present.
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    if duration <= TimeDelta::zero() {
        return "0m".to_owned();
    }

    let days = duration.num_days();
    let hours = duration.num_hours() - days * 24;
    let minutes = duration.num_minutes() - duration.num_hours() * 60;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }

    if parts.is_empty() {
        return "0m".to_owned();
    }
    parts.join(" ")
}
