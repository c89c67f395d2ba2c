use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static UPDATED_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^updated\s+").unwrap());
static OFFSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([+-])(\d{2}):?(\d{2})").unwrap());

/// Parse a published-date string into canonical ISO-8601 form.
///
/// Strategies are tried in order until one succeeds; an unparseable input
/// yields an empty string, never an error.
pub fn parse_date_to_iso(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return String::new();
    }

    parse_iso(s)
        .or_else(|| parse_month_abbrev(s))
        .or_else(|| parse_human_readable(s))
        .unwrap_or_default()
}

/// Strict ISO-8601: offset date-time (trailing `Z` treated as `+00:00`),
/// then naive date-time, then bare date at midnight. The emitted string
/// keeps whatever offset and sub-second precision was parsed.
fn parse_iso(s: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.to_rfc3339());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| format!("{}T00:00:00", date.format("%Y-%m-%d")))
}

/// `2026-Feb-01T13:28:27` style, read from exactly the first 20 characters,
/// with an optional `±HH:MM` or `±HHMM` offset suffix behind them.
fn parse_month_abbrev(s: &str) -> Option<String> {
    let head = s.get(..20)?;
    let dt = NaiveDateTime::parse_from_str(head, "%Y-%b-%dT%H:%M:%S").ok()?;

    let mut iso = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    if let Some(offset) = s.get(20..).and_then(reassemble_offset) {
        iso.push_str(&offset);
    }
    Some(iso)
}

/// Normalize a trailing timezone suffix to `±HH:MM`; a bare `±HHMM` offset
/// is reconstructed with the missing colon.
fn reassemble_offset(tail: &str) -> Option<String> {
    let caps = OFFSET_RE.captures(tail)?;
    Some(format!("{}{}:{}", &caps[1], &caps[2], &caps[3]))
}

/// `Updated Jan. 26, 2026` / `Jan. 26, 2026` / `January 26, 2026` styles;
/// the `Updated ` prefix is stripped case-insensitively before the first
/// attempt, and the unstripped original gets a second chance.
fn parse_human_readable(s: &str) -> Option<String> {
    let stripped = UPDATED_PREFIX_RE.replace(s, "");
    for candidate in [stripped.trim(), s] {
        let parsed = NaiveDate::parse_from_str(candidate, "%b. %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(candidate, "%B %d, %Y"));
        if let Ok(date) = parsed {
            return Some(format!("{}T00:00:00", date.format("%Y-%m-%d")));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_with_offset_passes_through() {
        assert_eq!(
            parse_date_to_iso("2026-02-02T02:30:50-05:00"),
            "2026-02-02T02:30:50-05:00"
        );
    }

    #[test]
    fn test_trailing_z_becomes_utc_offset() {
        assert_eq!(
            parse_date_to_iso("2026-02-02T02:30:50Z"),
            "2026-02-02T02:30:50+00:00"
        );
    }

    #[test]
    fn test_naive_datetime_and_bare_date() {
        assert_eq!(
            parse_date_to_iso("2026-02-02T02:30:50"),
            "2026-02-02T02:30:50"
        );
        assert_eq!(parse_date_to_iso("2026-02-02"), "2026-02-02T00:00:00");
    }

    #[test]
    fn test_iso_round_trips_to_same_instant() {
        let input = "2026-02-01T13:28:27-05:00";
        let canonical = parse_date_to_iso(input);
        assert!(!canonical.is_empty());
        assert_eq!(
            DateTime::parse_from_rfc3339(&canonical).unwrap(),
            DateTime::parse_from_rfc3339(input).unwrap()
        );
    }

    #[test]
    fn test_month_abbrev_with_colon_offset() {
        assert_eq!(
            parse_date_to_iso("2026-Feb-01T13:28:27-05:00"),
            "2026-02-01T13:28:27-05:00"
        );
    }

    #[test]
    fn test_month_abbrev_with_bare_offset() {
        assert_eq!(
            parse_date_to_iso("2026-Feb-01T13:28:27+0530"),
            "2026-02-01T13:28:27+05:30"
        );
    }

    #[test]
    fn test_month_abbrev_without_offset() {
        assert_eq!(
            parse_date_to_iso("2026-Feb-01T13:28:27"),
            "2026-02-01T13:28:27"
        );
    }

    #[test]
    fn test_updated_prefix_is_stripped() {
        assert_eq!(
            parse_date_to_iso("Updated Jan. 26, 2026"),
            "2026-01-26T00:00:00"
        );
        assert_eq!(
            parse_date_to_iso("UPDATED Jan. 26, 2026"),
            "2026-01-26T00:00:00"
        );
    }

    #[test]
    fn test_abbreviated_and_full_month_names() {
        assert_eq!(parse_date_to_iso("Jan. 26, 2026"), "2026-01-26T00:00:00");
        assert_eq!(parse_date_to_iso("January 26, 2026"), "2026-01-26T00:00:00");
    }

    #[test]
    fn test_unparseable_dates_yield_empty() {
        assert_eq!(parse_date_to_iso("not a date"), "");
        assert_eq!(parse_date_to_iso("2026-13-99"), "");
        assert_eq!(parse_date_to_iso(""), "");
        assert_eq!(parse_date_to_iso("   "), "");
    }
}
