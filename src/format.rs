//! Pure formatting and coercion helpers shared by the API handlers and the page.

use time::OffsetDateTime;

/// Parse a query value as a number, falling back when it is missing or not finite.
///
/// An empty (or all-whitespace) value parses as `0`, the way browsers coerce
/// empty strings.
pub fn get_number(raw: Option<&str>, fallback: f64) -> f64 {
    match raw.map(str::trim) {
        Some("") => 0.0,
        Some(value) => match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => parsed,
            _ => fallback,
        },
        None => fallback,
    }
}

/// Like [`get_number`], but zero also falls back.
pub fn nonzero_number(raw: Option<&str>, fallback: f64) -> f64 {
    let parsed = get_number(raw, f64::NAN);
    if parsed == 0.0 || !parsed.is_finite() {
        fallback
    } else {
        parsed
    }
}

/// Read a JSON number or numeric string.
pub fn number_from_value(value: Option<&serde_json::Value>) -> Option<f64> {
    match value? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Round half up (towards positive infinity), e.g. `-2.5 -> -2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn meters_to_km(meters: f64) -> i64 {
    round_half_up(meters / 1000.0)
}

/// Distance label for a place search hit; never reports 0 km.
pub fn place_distance_km(meters: f64) -> i64 {
    let meters = if meters.is_finite() { meters } else { 0.0 };
    meters_to_km(meters).max(1)
}

pub fn seconds_to_minutes(seconds: f64) -> i64 {
    round_half_up(seconds / 60.0)
}

/// `"2h"`, `"2h 5m"` or `"45m"`.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}

/// 24-hour `HH:MM`.
pub fn format_time_of_day(at: OffsetDateTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Drop anything that looks like an HTML tag.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            // `<>` is not a tag
            Some(0) => {
                out.push_str("<>");
                rest = &after[1..];
            }
            Some(close) => rest = &after[close + 1..],
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
