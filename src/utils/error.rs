use std::fmt;

/// Failure while reading or rewriting the tabular record file.
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
            StoreError::Malformed(msg) => write!(f, "Malformed data file: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            StoreError::Io(err.to_string())
        } else {
            StoreError::Malformed(err.to_string())
        }
    }
}
