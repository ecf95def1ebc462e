//! Utility functions for parsing the metadata time strings into chrono types.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

static RE_SUBSEC_DIGITS: OnceLock<Regex> = OnceLock::new();

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Parses a naive datetime string as found in EXIF (`YYYY:MM:DD HH:MM:SS[.fff]`).
pub fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y:%m:%d %H:%M:%S",
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ];
    let s = s.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parses an EXIF capture field, accepting an optional trailing offset.
///
/// exiftool reports XMP-only dates as `YYYY:MM:DD HH:MM:SS+HH:MM`; the offset is
/// dropped and the wall-clock part kept.
pub fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%z")
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| parse_naive(s))
}

/// Parses a file modification date into the wall-clock time it was recorded in.
///
/// Accepts exiftool's `YYYY:MM:DD HH:MM:SS+HH:MM`, a plain EXIF datetime,
/// and the `DD-Mon-YYYY HH:MM:SS` layout (`20-May-2013 14:43:10`).
pub fn parse_file_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    parse_exif_datetime(s)
        .or_else(|| NaiveDateTime::parse_from_str(s, "%d-%b-%Y %H:%M:%S").ok())
}

/// Turns a subsecond digit string into a fraction of a second: `"523"` is `0.523`.
///
/// Returns `None` for anything that is not a plain run of digits.
pub fn parse_subsec_fraction(s: &str) -> Option<f64> {
    let re = RE_SUBSEC_DIGITS.get_or_init(|| Regex::new(r"^\d{1,9}$").unwrap());
    let digits = s.trim();
    if !re.is_match(digits) {
        return None;
    }
    format!("0.{digits}").parse::<f64>().ok()
}

/// Seconds since the start of the month the datetime falls in.
///
/// Subseconds stored in the datetime itself are ignored; fractions come from
/// the separate subsecond field only.
pub fn day_of_month_seconds(dt: &NaiveDateTime) -> f64 {
    f64::from(dt.day()) * SECONDS_PER_DAY
        + f64::from(dt.hour()) * SECONDS_PER_HOUR
        + f64::from(dt.minute()) * SECONDS_PER_MINUTE
        + f64::from(dt.second())
}
