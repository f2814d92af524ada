//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Format epoch milliseconds as a local date/time.
///
/// Returns "N/A" for zero or out-of-range values.
pub fn format_millis_local(millis: i64) -> String {
    if millis == 0 {
        return "N/A".to_string();
    }
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
        None => "N/A".to_string(),
    }
}

/// Format an ISO 8601 timestamp from the backend as a local date.
///
/// Unparseable input is returned as-is.
pub fn format_iso_local(timestamp: &str) -> String {
    match timestamp.parse::<DateTime<Utc>>() {
        Ok(dt) => dt.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        Err(_) if timestamp.is_empty() => "N/A".to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Remove HTML tags from backend-provided summaries and steps.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format an ingredient quantity, dropping needless decimals.
pub fn format_amount(amount: f64, unit: &str) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let number = if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    };
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// Format minutes as "1 h 15 min" / "45 min".
pub fn format_minutes(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => "N/A".to_string(),
        Some(m) if m >= 60 && m % 60 == 0 => format!("{} h", m / 60),
        Some(m) if m >= 60 => format!("{} h {} min", m / 60, m % 60),
        Some(m) => format!("{} min", m),
    }
}
