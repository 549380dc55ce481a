//! Date parsing for the `newest`/`oldest` orderings.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Timestamp assigned to records whose date cannot be parsed.
pub const UNPARSEABLE: i64 = i64::MIN;

/// Milliseconds since the Unix epoch for `raw`, or [`UNPARSEABLE`].
///
/// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD` (start of the period, UTC),
/// RFC 3339 timestamps, `YYYY-MM-DDTHH:MM` with or without an offset, and
/// `YYYY-MM-DDTHH:MM:SS[.fff]` without an offset. Timestamps lacking an
/// offset are read as UTC.
#[must_use]
pub fn timestamp(raw: &str) -> i64 {
	parse(raw).unwrap_or(UNPARSEABLE)
}

/// Parse `raw` into milliseconds since the Unix epoch.
#[must_use]
pub fn parse(raw: &str) -> Option<i64> {
	let raw = raw.trim();
	if raw.is_empty() {
		return None;
	}

	if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		return date
			.and_hms_opt(0, 0, 0)
			.map(|midnight| midnight.and_utc().timestamp_millis());
	}

	if let Ok(moment) = DateTime::parse_from_rfc3339(raw) {
		return Some(moment.timestamp_millis());
	}

	for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
		if let Ok(moment) = NaiveDateTime::parse_from_str(raw, format) {
			return Some(moment.and_utc().timestamp_millis());
		}
	}

	if let Some(moment) = parse_minutes_with_offset(raw) {
		return Some(moment.timestamp_millis());
	}

	parse_reduced_date(raw)
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.map(|midnight| midnight.and_utc().timestamp_millis())
}

/// `YYYY-MM-DDTHH:MM` followed by `Z` or `±hh:mm`.
fn parse_minutes_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
	let zulu = raw
		.strip_suffix('Z')
		.or_else(|| raw.strip_suffix('z'))
		.map(|local| format!("{local}+00:00"));
	let candidate = zulu.as_deref().unwrap_or(raw);
	DateTime::parse_from_str(candidate, "%Y-%m-%dT%H:%M%:z").ok()
}

/// `YYYY-MM` or `YYYY`, pinned to the first day of the period.
fn parse_reduced_date(raw: &str) -> Option<NaiveDate> {
	let (year, month) = match raw.split_once('-') {
		Some((year, month)) if month.len() == 2 && month.bytes().all(|b| b.is_ascii_digit()) => {
			(year, month.parse().ok()?)
		}
		Some(_) => return None,
		None => (raw, 1),
	};
	if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn calendar_dates_are_midnight_utc() {
		assert_eq!(parse("1970-01-02"), Some(86_400_000));
		assert!(timestamp("2022-11-20") > timestamp("2022-09-05"));
	}

	#[test]
	fn rfc3339_offsets_are_normalised() {
		assert_eq!(
			parse("2024-01-15T10:00:00+02:00"),
			parse("2024-01-15T08:00:00Z")
		);
		assert_eq!(parse("2024-01-15T08:00:00"), parse("2024-01-15T08:00:00Z"));
	}

	#[test]
	fn year_and_month_pin_to_period_start() {
		assert_eq!(parse("2023-05"), parse("2023-05-01"));
		assert_eq!(parse("2023"), parse("2023-01-01"));
		assert!(timestamp("2023-05") > timestamp("2020-01-01"));
		assert_eq!(parse("2023-13"), None);
		assert_eq!(parse("2023-5"), None);
		assert_eq!(parse("23"), None);
	}

	#[test]
	fn minute_precision_timestamps_parse() {
		assert_eq!(parse("2023-05-15T10:30"), parse("2023-05-15T10:30:00Z"));
		assert_eq!(parse("2023-05-15T10:30Z"), parse("2023-05-15T10:30:00Z"));
		assert_eq!(parse("2023-05-15T12:30+02:00"), parse("2023-05-15T10:30:00Z"));
		assert_eq!(parse("2023-05-15T10:30-01:00"), parse("2023-05-15T11:30:00Z"));
	}

	#[test]
	fn garbage_falls_back_to_oldest() {
		assert_eq!(timestamp(""), UNPARSEABLE);
		assert_eq!(timestamp("2022-13-45"), UNPARSEABLE);
		assert_eq!(timestamp("yesterday"), UNPARSEABLE);
		assert!(timestamp("yesterday") < timestamp("0001-01-01"));
	}
}
