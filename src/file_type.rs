use mime_guess::MimeGuess;
use serde_json::Value;
use std::path::{Path, PathBuf};

const OTHER_GROUP: &str = "Other";

/// What the metadata reader says a file is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Image { mime_type: String },
    /// A file the reader recognised, but not as an image.
    Other { file_type: String },
    /// The reader produced no type information at all.
    Unknown,
}

/// Classifies a file from the `FileType` and `MIMEType` fields of grouped exiftool output.
pub fn classify_metadata(exif_info: &Value) -> FileKind {
    let mime_type = get_other_field(exif_info, "MIMEType");
    let file_type = get_other_field(exif_info, "FileType");

    match (mime_type, file_type) {
        (Some(mime), _) if mime.starts_with("image/") => FileKind::Image {
            mime_type: mime.to_owned(),
        },
        (_, Some(file_type)) => FileKind::Other {
            file_type: file_type.to_owned(),
        },
        (Some(mime), None) => FileKind::Other {
            file_type: mime.to_owned(),
        },
        (None, None) => FileKind::Unknown,
    }
}

fn get_other_field<'a>(exif_info: &'a Value, field: &str) -> Option<&'a str> {
    exif_info.get(OTHER_GROUP)?.get(field)?.as_str()
}

/// Cheap diagnostic check used when the metadata reader fails.
///
/// Returns `None` when there is no regular file at `path`, otherwise the MIME type
/// guessed from the extension (`application/octet-stream` when it is unknown).
pub fn sniff_file_type(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let mime = MimeGuess::from_path(path).first_or_octet_stream();
    Some(mime.essence_str().to_owned())
}

/// Finds the file `path` names, matching its file name case-insensitively.
///
/// An exact match wins; otherwise the parent directory is searched for a single entry
/// whose name differs only in case. Directory components are matched as given.
pub fn resolve_case_insensitive(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let wanted = path.file_name()?.to_str()?.to_lowercase();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut candidates = std::fs::read_dir(parent)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.to_lowercase() == wanted)
        })
        .map(|entry| entry.path())
        .filter(|candidate| candidate.is_file());

    let found = candidates.next()?;
    // Two names differing only in case is ambiguous; the caller gets no match.
    if candidates.next().is_some() {
        return None;
    }
    Some(parent.join(found.file_name()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_image() {
        let exif = json!({
            "Other": { "FileType": "JPEG", "MIMEType": "image/jpeg" }
        });
        assert_eq!(
            classify_metadata(&exif),
            FileKind::Image {
                mime_type: "image/jpeg".to_string()
            }
        );
    }

    #[test]
    fn test_classifies_text_file_as_other() {
        let exif = json!({
            "Other": { "FileType": "TXT", "MIMEType": "text/plain" }
        });
        assert_eq!(
            classify_metadata(&exif),
            FileKind::Other {
                file_type: "TXT".to_string()
            }
        );
    }

    #[test]
    fn test_falls_back_to_mime_type_name() {
        let exif = json!({ "Other": { "MIMEType": "video/mp4" } });
        assert_eq!(
            classify_metadata(&exif),
            FileKind::Other {
                file_type: "video/mp4".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_without_type_fields() {
        assert_eq!(classify_metadata(&json!({})), FileKind::Unknown);
        assert_eq!(
            classify_metadata(&json!({ "Other": { "Error": "File not found" } })),
            FileKind::Unknown
        );
    }

    #[test]
    fn test_sniff_existing_files() {
        let text = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert_eq!(sniff_file_type(text.path()).as_deref(), Some("text/plain"));

        let no_extension = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            sniff_file_type(no_extension.path()).as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn test_sniff_missing_path() {
        assert_eq!(sniff_file_type(Path::new("no/such/photo.jpg")), None);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(sniff_file_type(dir.path()), None);
    }

    #[test]
    fn test_resolve_exact_and_differently_cased_names() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("IMG_0001.JPG");
        std::fs::write(&photo, b"jpeg").unwrap();

        assert_eq!(resolve_case_insensitive(&photo), Some(photo.clone()));
        assert_eq!(
            resolve_case_insensitive(&dir.path().join("img_0001.jpg")),
            Some(photo.clone())
        );
        assert_eq!(resolve_case_insensitive(&dir.path().join("img_0002.jpg")), None);
    }

    #[test]
    fn test_resolve_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("Album")).unwrap();

        assert_eq!(resolve_case_insensitive(&dir.path().join("album")), None);
        assert_eq!(resolve_case_insensitive(Path::new("no/such/dir/photo.jpg")), None);
    }
}
