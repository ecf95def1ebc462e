//! Source priority and day-of-month arithmetic for the ordering key.

use super::error::TimeError;
use super::parsing::{
    day_of_month_seconds, parse_exif_datetime, parse_file_date, parse_subsec_fraction,
};
use super::structs::{DayTimestamp, ImageMetadata, TimestampSource};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Computes the day-of-month timestamp from the metadata fields.
///
/// Sources are tried in this order, the first one that parses wins:
/// 1. `DateTimeOriginal`, plus `SubSecTimeOriginal` as a fraction when present.
/// 2. `DateTime`.
/// 3. `FileModifyDate`, only when `include_file_time` is set.
///
/// A field that is present but malformed is skipped rather than treated as an error.
pub fn get_day_timestamp(
    metadata: &ImageMetadata,
    include_file_time: bool,
) -> Result<DayTimestamp, TimeError> {
    from_date_time_original(metadata)
        .or_else(|| from_date_time(metadata))
        .or_else(|| {
            if include_file_time {
                from_file_modify_date(metadata)
            } else {
                None
            }
        })
        .ok_or(TimeError::Extraction)
}

impl DayTimestamp {
    /// Builds the ordering key for `captured_at`, adding `fraction` seconds on top.
    pub fn new(captured_at: NaiveDateTime, fraction: f64, source: TimestampSource) -> Self {
        Self {
            seconds: day_of_month_seconds(&captured_at) + fraction,
            captured_at,
            source,
        }
    }
}

fn from_date_time_original(metadata: &ImageMetadata) -> Option<DayTimestamp> {
    let raw = metadata.date_time_original.as_deref()?;
    let Some(captured_at) = parse_exif_datetime(raw) else {
        warn!("Ignoring malformed DateTimeOriginal {raw:?}");
        return None;
    };

    let fraction = metadata.sub_sec_time_original.as_deref().and_then(|subsec| {
        let fraction = parse_subsec_fraction(subsec);
        if fraction.is_none() {
            warn!("Ignoring malformed SubSecTimeOriginal {subsec:?}");
        }
        fraction
    });

    let timestamp = match fraction {
        Some(fraction) => DayTimestamp::new(
            captured_at,
            fraction,
            TimestampSource::DateTimeOriginalWithSubSec,
        ),
        None => DayTimestamp::new(captured_at, 0.0, TimestampSource::DateTimeOriginal),
    };
    debug!("Using {} = {raw:?}", timestamp.source);
    Some(timestamp)
}

fn from_date_time(metadata: &ImageMetadata) -> Option<DayTimestamp> {
    let raw = metadata.date_time.as_deref()?;
    let Some(captured_at) = parse_exif_datetime(raw) else {
        warn!("Ignoring malformed DateTime {raw:?}");
        return None;
    };
    debug!("Using DateTime = {raw:?}");
    Some(DayTimestamp::new(captured_at, 0.0, TimestampSource::DateTime))
}

fn from_file_modify_date(metadata: &ImageMetadata) -> Option<DayTimestamp> {
    let raw = metadata.file_modify_date.as_deref()?;
    let Some(captured_at) = parse_file_date(raw) else {
        warn!("Ignoring malformed FileModifyDate {raw:?}");
        return None;
    };
    debug!("Using FileModifyDate = {raw:?}");
    Some(DayTimestamp::new(
        captured_at,
        0.0,
        TimestampSource::FileModifyDate,
    ))
}
