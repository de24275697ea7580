//! HTTP cache validation module
//!
//! `Last-Modified` generation and `If-Modified-Since` handling. These are the
//! only caching headers a plain static file server emits.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::SystemTime;

/// IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a file modification time as an HTTP date
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

/// Parse an HTTP date; `None` for anything that is not an IMF-fixdate
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), HTTP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Check whether the client's copy is still current
///
/// Returns true (respond 304) when `If-Modified-Since` parses and the file
/// has not changed since, compared at one-second resolution.
pub fn is_not_modified(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(since) = if_modified_since.and_then(parse_http_date) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_format_http_date() {
        assert_eq!(format_http_date(at(784_111_777)), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_parse_roundtrips_formatted_value() {
        let parsed = parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
        assert_eq!(parsed.timestamp(), 784_111_777);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_http_date("Sunday, 06-Nov-94 08:49:37 GMT").is_none());
        assert!(parse_http_date("yesterday").is_none());
    }

    #[test]
    fn test_not_modified() {
        let header = "Sun, 06 Nov 1994 08:49:37 GMT";
        assert!(is_not_modified(Some(header), at(784_111_777)));
        assert!(is_not_modified(Some(header), at(784_000_000)));
        // Sub-second precision on the file does not defeat the match
        assert!(is_not_modified(
            Some(header),
            at(784_111_777) + Duration::from_millis(500)
        ));
        assert!(!is_not_modified(Some(header), at(784_111_778)));
    }

    #[test]
    fn test_missing_or_invalid_header_is_ignored() {
        assert!(!is_not_modified(None, at(0)));
        assert!(!is_not_modified(Some("garbage"), at(0)));
    }
}
