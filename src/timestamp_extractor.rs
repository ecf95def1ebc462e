use crate::TimestampError;
use crate::file_type::{FileKind, classify_metadata, resolve_case_insensitive, sniff_file_type};
use crate::reader::MetadataReader;
use crate::time::{
    DayTimestamp, ImageMetadata, TimestampSource, file_system_mtime, get_day_timestamp,
};
use bon::bon;
use exiftool::ExifTool;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extracts day-of-month ordering timestamps from image files.
///
/// The extractor owns its metadata reader, by default a running `exiftool` process,
/// so create it once and reuse it for every file.
///
/// ```rust,no_run
/// # use image_timestamp::{TimestampExtractor, TimestampError};
/// # use std::path::Path;
/// # fn main() -> Result<(), TimestampError> {
/// let mut extractor = TimestampExtractor::builder().build()?;
/// let seconds = extractor.get_timestamp(Path::new("assets/sunset.jpg"))?;
/// println!("{seconds}");
/// # Ok(())
/// # }
/// ```
pub struct TimestampExtractor<R = ExifTool> {
    reader: R,
    file_time_fallback: bool,
}

#[bon]
impl TimestampExtractor<ExifTool> {
    /// Constructs an exiftool-backed `TimestampExtractor` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `exiftool_path: Option<PathBuf>` - An optional path to a specific `exiftool` executable. If `None`, `exiftool` will be searched for in the system's PATH.
    /// * `file_time_fallback: bool` - (Default: `true`) Whether the file modification time may be used when the EXIF capture fields are missing.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::Exiftool`] if the `exiftool` executable cannot be found or fails to start.
    #[builder]
    pub fn new(
        exiftool_path: Option<PathBuf>,
        #[builder(default = true)] file_time_fallback: bool,
    ) -> Result<Self, TimestampError> {
        let exiftool = match exiftool_path {
            Some(path) => ExifTool::with_executable(&path)?,
            None => ExifTool::new()?,
        };
        Ok(Self {
            reader: exiftool,
            file_time_fallback,
        })
    }
}

impl<R: MetadataReader> TimestampExtractor<R> {
    /// Wraps an arbitrary metadata reader, with the file-time fallback enabled.
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            file_time_fallback: true,
        }
    }

    /// Enables or disables the file modification time as a last-resort source.
    #[must_use]
    pub fn file_time_fallback(mut self, enabled: bool) -> Self {
        self.file_time_fallback = enabled;
        self
    }

    /// Returns the ordering key of the image at `path` in seconds.
    ///
    /// The value is `day * 86400 + hour * 3600 + minute * 60 + second`, plus the
    /// subsecond fraction of `DateTimeOriginal` when the camera recorded one.
    /// Month and year are ignored, so keys of photos from different months do not
    /// order correctly.
    ///
    /// # Errors
    ///
    /// * [`TimestampError::PathNotFound`]: there is no file at `path`.
    /// * [`TimestampError::UnsupportedFileType`]: the file exists but is not an image.
    /// * [`TimestampError::TimestampUnavailable`]: the image has no usable timestamp.
    pub fn get_timestamp(&mut self, path: &Path) -> Result<f64, TimestampError> {
        Ok(self.extract(path)?.seconds)
    }

    /// Like [`get_timestamp`](Self::get_timestamp), but also reports the full
    /// date/time and which field the key came from.
    ///
    /// The file name is matched case-insensitively when no file has the exact name.
    pub fn extract(&mut self, path: &Path) -> Result<DayTimestamp, TimestampError> {
        let Some(resolved) = resolve_case_insensitive(path) else {
            return Err(TimestampError::PathNotFound(path.to_path_buf()));
        };
        if resolved != path {
            debug!("Resolved {} to {}", path.display(), resolved.display());
        }
        self.extract_resolved(path, &resolved)
    }

    fn extract_resolved(
        &mut self,
        requested: &Path,
        path: &Path,
    ) -> Result<DayTimestamp, TimestampError> {
        let exif_info = match self.reader.read_metadata(path) {
            Ok(exif_info) => exif_info,
            Err(err) => {
                debug!("Metadata reader failed for {}: {err}", path.display());
                return Err(diagnose_unreadable(requested, path));
            }
        };

        match classify_metadata(&exif_info) {
            FileKind::Image { mime_type } => {
                debug!("{} is an image ({mime_type})", path.display());
            }
            FileKind::Other { file_type } => {
                return Err(TimestampError::UnsupportedFileType {
                    path: requested.to_path_buf(),
                    file_type,
                });
            }
            FileKind::Unknown => return Err(diagnose_unreadable(requested, path)),
        }

        let metadata = ImageMetadata::from_exif(&exif_info);
        if let Ok(timestamp) = get_day_timestamp(&metadata, self.file_time_fallback) {
            return Ok(timestamp);
        }

        if self.file_time_fallback
            && let Some(modified) = file_system_mtime(path)
        {
            debug!("Using filesystem modification time for {}", path.display());
            return Ok(DayTimestamp::new(modified, 0.0, TimestampSource::FileSystem));
        }

        Err(TimestampError::TimestampUnavailable(requested.to_path_buf()))
    }
}

/// Turns a failed metadata read into the error the caller sees, using the file-type sniffer.
fn diagnose_unreadable(requested: &Path, path: &Path) -> TimestampError {
    match sniff_file_type(path) {
        Some(file_type) => TimestampError::UnsupportedFileType {
            path: requested.to_path_buf(),
            file_type,
        },
        None => TimestampError::PathNotFound(requested.to_path_buf()),
    }
}
