//! Small text and time helpers shared by the views.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone};

/// Shortens `text` to `max_length` characters, keeping `start_chars` from
/// the head and `end_chars` from the tail, padding the middle with dots.
/// Text within the limit is returned unchanged.
pub fn truncate(text: &str, start_chars: usize, end_chars: usize, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }
    let mut start: String = chars[..start_chars.min(chars.len())].iter().collect();
    let end: String = chars[chars.len() - end_chars.min(chars.len())..].iter().collect();
    while start.chars().count() + end.chars().count() < max_length {
        start.push('.');
    }
    start + &end
}

/// Formats a unix-millisecond timestamp as e.g. "Mon, Dec 1, 2025" (UTC).
pub fn format_date(timestamp_ms: u64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms as i64)
        .map(|date| date.format("%a, %b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Formats a unix-millisecond timestamp as a local "YYYY-MM-DDTHH:MM"
/// string, the shape datetime form inputs expect.
pub fn format_timestamp(timestamp_ms: u64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms as i64)
        .single()
        .map(|date| date.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Current unix time in milliseconds.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Elecciones", 4, 4, 11), "Elecciones");
    }

    #[test]
    fn truncate_pads_with_dots_to_max_length() {
        let address = "0x894a1a70311cd19a3ef33a38b18eab618394d6dd";
        assert_eq!(truncate(address, 4, 4, 11), "0x89...d6dd");
    }

    #[test]
    fn truncate_with_no_tail() {
        let text = "Una descripción suficientemente larga para ser recortada";
        let shortened = truncate(text, 30, 0, 33);
        assert_eq!(shortened.chars().count(), 33);
        assert!(shortened.ends_with("..."));
    }

    #[test]
    fn format_date_renders_utc() {
        // 2025-12-01T00:00:00Z
        assert_eq!(format_date(1_764_547_200_000), "Mon, Dec 1, 2025");
    }

    #[test]
    fn format_timestamp_matches_input_shape() {
        let formatted = format_timestamp(1_764_547_200_000);
        assert_eq!(formatted.len(), 16);
        assert_eq!(&formatted[10..11], "T");
    }
}
