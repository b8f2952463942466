//! Field-level parsing helpers shared by HTTP handlers.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::Error;

/// Parse a timestamp field accepting RFC 3339 or a bare date-time.
///
/// Clients behind the gateway historically sent local date-times without an
/// offset; those are taken as UTC.
pub fn parse_timestamp(value: &str, field: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::invalid_request(format!("{field} must be a valid timestamp")))
}
