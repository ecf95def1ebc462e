//! Module for extracting the day-of-month ordering timestamp from metadata fields.
pub mod error;
mod extraction;
mod logic;
mod parsing;
pub mod structs;
pub use extraction::file_system_mtime;
pub use logic::get_day_timestamp;
pub use structs::{DayTimestamp, ImageMetadata, TimestampSource};
