use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    #[error("Could not extract any usable timestamp from the metadata")]
    Extraction,
}
