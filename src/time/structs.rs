use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// The raw timestamp fields read from a file's metadata, in priority order.
///
/// Values are kept exactly as the metadata reader reported them; parsing happens
/// when a timestamp is selected, so a malformed field can fall through to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Camera capture time, `YYYY:MM:DD HH:MM:SS`.
    pub date_time_original: Option<String>,
    /// Fractional seconds belonging to `date_time_original`, as a digit string (`"523"` is 0.523 s).
    pub sub_sec_time_original: Option<String>,
    /// The generic EXIF `DateTime` tag (exiftool calls it `ModifyDate`), `YYYY:MM:DD HH:MM:SS`.
    pub date_time: Option<String>,
    /// File modification date as reported by the metadata reader.
    pub file_modify_date: Option<String>,
}

/// Which field a [`DayTimestamp`] was computed from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    DateTimeOriginal,
    DateTimeOriginalWithSubSec,
    DateTime,
    FileModifyDate,
    /// Modification time read straight from the filesystem.
    FileSystem,
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DateTimeOriginal => "DateTimeOriginal",
            Self::DateTimeOriginalWithSubSec => "DateTimeOriginal + SubSecTimeOriginal",
            Self::DateTime => "DateTime",
            Self::FileModifyDate => "FileModifyDate",
            Self::FileSystem => "FileSystem",
        };
        f.write_str(name)
    }
}

/// A relative ordering key for a photo.
///
/// `seconds` is `day * 86400 + hour * 3600 + minute * 60 + second (+ fraction)`.
/// Month and year are not part of the value, so keys only order correctly
/// within one month: `2013-05-20 14:43:10` and `2013-06-20 14:43:10` compare equal.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayTimestamp {
    pub seconds: f64,
    /// The full date/time the key was derived from, month and year included.
    pub captured_at: NaiveDateTime,
    pub source: TimestampSource,
}
