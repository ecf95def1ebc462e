//! Functions for pulling the raw timestamp fields out of grouped (`-g2`) exiftool JSON
//! and out of the filesystem.

use super::structs::ImageMetadata;
use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;
use std::path::Path;
use std::time::SystemTime;

const TIME_GROUP: &str = "Time";

impl ImageMetadata {
    /// Collects the timestamp fields from exiftool output grouped by category.
    ///
    /// Missing groups or fields simply leave the corresponding value empty.
    pub fn from_exif(exif_info: &Value) -> Self {
        Self {
            date_time_original: get_string_field(exif_info, TIME_GROUP, "DateTimeOriginal")
                .map(str::to_owned),
            sub_sec_time_original: get_digits_field(exif_info, TIME_GROUP, "SubSecTimeOriginal"),
            date_time: get_string_field(exif_info, TIME_GROUP, "ModifyDate").map(str::to_owned),
            file_modify_date: get_string_field(exif_info, TIME_GROUP, "FileModifyDate")
                .map(str::to_owned),
        }
    }
}

/// Safely extracts a string field from nested JSON Value.
pub fn get_string_field<'a>(value: &'a Value, group: &str, field: &str) -> Option<&'a str> {
    value.get(group)?.get(field)?.as_str()
}

/// Reads a field exiftool may print either as a JSON number (`523`) or,
/// when it has leading zeros, as a string (`"052"`).
fn get_digits_field(value: &Value, group: &str, field: &str) -> Option<String> {
    match value.get(group)?.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    }
}

/// The filesystem modification time of `path` as local wall-clock time.
pub fn file_system_mtime(path: &Path) -> Option<NaiveDateTime> {
    let meta = std::fs::metadata(path).ok()?;
    let modified: SystemTime = meta.modified().ok()?;
    let dt: DateTime<Local> = modified.into();
    Some(dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_nothing_from_empty_json() {
        let metadata = ImageMetadata::from_exif(&json!({}));
        assert_eq!(metadata, ImageMetadata::default());
    }

    #[test]
    fn test_extracts_all_time_fields() {
        let exif = json!({
            "Time": {
                "DateTimeOriginal": "2013:05:20 14:43:10",
                "SubSecTimeOriginal": "052",
                "ModifyDate": "2013:05:21 09:00:00",
                "FileModifyDate": "2013:05:22 10:00:00+02:00"
            },
            "Other": {
                "FileType": "JPEG",
                "MIMEType": "image/jpeg"
            }
        });

        let metadata = ImageMetadata::from_exif(&exif);
        assert_eq!(
            metadata.date_time_original.as_deref(),
            Some("2013:05:20 14:43:10")
        );
        assert_eq!(metadata.sub_sec_time_original.as_deref(), Some("052"));
        assert_eq!(metadata.date_time.as_deref(), Some("2013:05:21 09:00:00"));
        assert_eq!(
            metadata.file_modify_date.as_deref(),
            Some("2013:05:22 10:00:00+02:00")
        );
    }

    #[test]
    fn test_numeric_subsec_field_is_read_as_digits() {
        let exif = json!({
            "Time": {
                "DateTimeOriginal": "2024:04:04 14:15:16",
                "SubSecTimeOriginal": 456
            }
        });

        let metadata = ImageMetadata::from_exif(&exif);
        assert_eq!(metadata.sub_sec_time_original.as_deref(), Some("456"));
    }

    #[test]
    fn test_file_system_mtime() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(file_system_mtime(file.path()).is_some());
        assert!(file_system_mtime(Path::new("definitely/not/here.jpg")).is_none());
    }

    #[test]
    fn test_fields_outside_time_group_are_ignored() {
        // Ungrouped output must not be mistaken for the grouped layout.
        let exif = json!({
            "DateTimeOriginal": "2013:05:20 14:43:10",
            "Other": { "DateTimeOriginal": "2013:05:20 14:43:10" }
        });

        let metadata = ImageMetadata::from_exif(&exif);
        assert!(metadata.date_time_original.is_none());
    }
}
