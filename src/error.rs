use thiserror::Error;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found: {0} (looked up after header normalization)")]
    MissingColumn(String),

    #[error("No usable rows in {0} after cleaning")]
    EmptyDataset(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TillError>;
