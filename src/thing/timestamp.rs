use chrono::{Datelike, NaiveDateTime, Timelike};

/// Placeholder for a property that was never updated
pub const UNSET: &str = "-";

const RAW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Reformat an API timestamp as `M/D/YYYY H:M:S AM|PM`.
///
/// Input that does not parse is returned unchanged.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() || raw == UNSET {
        return raw.to_string();
    }
    match NaiveDateTime::parse_from_str(raw, RAW_FORMAT) {
        Ok(ts) => format_12h(&ts),
        Err(_) => raw.to_string(),
    }
}

fn format_12h(ts: &NaiveDateTime) -> String {
    let (pm, hour) = ts.hour12();
    format!(
        "{}/{}/{} {}:{}:{} {}",
        ts.month(),
        ts.day(),
        ts.year(),
        hour,
        ts.minute(),
        ts.second(),
        if pm { "PM" } else { "AM" }
    )
}
