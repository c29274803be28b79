use thiserror::Error;

/// Validation failures raised while turning raw rows into a [`LaunchDataset`].
///
/// [`LaunchDataset`]: super::model::LaunchDataset
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: String },

    #[error("dataset contains no launch records")]
    Empty,

    #[error("no launch record carries a payload mass")]
    NoPayloads,
}
