use std::fmt;

/// Result type for billfold-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Date string did not parse as a calendar date
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
        }
    }
}

impl std::error::Error for Error {}
