use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an upstream timestamp into UTC.
///
/// Accepted forms, tried in order:
/// - RFC 3339 (`2020-06-11T14:00:00Z`, `2020-06-11T16:00:00+02:00`)
/// - naive date-time, taken as UTC (`2020-06-11 14:00:00`, `2020-06-11T14:00:00.000`)
/// - bare date, taken as midnight UTC (`2020-06-11`)
///
/// Anything else, including empty strings, yields `None`.
///
/// # Examples
///
/// ```
/// use siege_profile::data_fetcher::processors::parse_timestamp;
///
/// let parsed = parse_timestamp("2020-06-11T14:00:00Z").unwrap();
/// assert_eq!(parsed.to_rfc3339(), "2020-06-11T14:00:00+00:00");
/// assert!(parse_timestamp("not a date").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// [`parse_timestamp`] over an optional field.
pub fn parse_optional_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_timestamp)
}
