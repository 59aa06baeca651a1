use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

/// Naive ISO-8601 layouts seen in older transcripts (no offset suffix)
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a transcript timestamp into a timezone-aware UTC value.
///
/// RFC3339 strings are converted to UTC. Naive strings are normalized as UTC so
/// callers never compare aware and naive values. Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            debug!("Normalizing naive timestamp {} as UTC", raw);
            return Some(naive.and_utc());
        }
    }

    None
}
