use crate::error::MetadataReadError;
use exiftool::ExifTool;
use serde_json::Value;
use std::path::Path;

/// Source of per-file metadata, as grouped exiftool JSON (`-g2`).
///
/// Time fields are expected under `"Time"`, `FileType` and `MIMEType` under `"Other"`.
pub trait MetadataReader {
    fn read_metadata(&mut self, path: &Path) -> Result<Value, MetadataReadError>;
}

impl MetadataReader for ExifTool {
    fn read_metadata(&mut self, path: &Path) -> Result<Value, MetadataReadError> {
        Ok(self.json(path, &["-g2"])?)
    }
}
