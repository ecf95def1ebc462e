//! # Image Timestamp
//!
//! Extract a relative ordering timestamp from photo files.
//!
//! The timestamp is read from the EXIF capture time when the file has one, and falls back
//! to the generic EXIF `DateTime` tag and finally to the file modification time.
//! Metadata is read through `exiftool`.
//!
//! ## The ordering key
//!
//! The value returned is `day * 86400 + hour * 3600 + minute * 60 + second`, plus the
//! subsecond fraction of the capture time when the camera recorded one. Only the day of
//! the month enters the value, so keys order photos correctly within one month but not
//! across a month boundary: a photo from the 1st of June sorts before one from the 20th
//! of May. Use [`DayTimestamp::captured_at`] when the full date is needed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use image_timestamp::TimestampExtractor;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut extractor = TimestampExtractor::builder().build()?;
//!     let timestamp = extractor.extract(Path::new("assets/sunset.jpg"))?;
//!
//!     println!("Key: {}", timestamp.seconds);
//!     println!("Source: {}", timestamp.source);
//!
//!     Ok(())
//! }
//! ```

mod error;
pub mod file_type;
pub mod reader;
pub mod time;
pub mod timestamp_extractor;

pub use error::{MetadataReadError, TimestampError};
pub use reader::MetadataReader;
pub use time::{DayTimestamp, ImageMetadata, TimestampSource};
pub use timestamp_extractor::TimestampExtractor;
