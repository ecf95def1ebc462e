use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the image-timestamp crate.
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("No file found at path: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Unsupported file type '{file_type}' for {}", .path.display())]
    UnsupportedFileType { path: PathBuf, file_type: String },

    #[error("Could not find a usable timestamp in {}", .0.display())]
    TimestampUnavailable(PathBuf),

    #[error("Exiftool failed to start")]
    Exiftool(#[from] exiftool::ExifToolError),
}

/// Failure of a [`MetadataReader`](crate::reader::MetadataReader) to produce metadata.
#[derive(Error, Debug)]
pub enum MetadataReadError {
    #[error("Exiftool failed to execute or process the file")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("No metadata available for {}", .0.display())]
    NoMetadata(PathBuf),
}
