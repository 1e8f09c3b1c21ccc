use std::fmt;

/// Represents the different types of errors that can occur while constructing
/// a detector. Classification itself has no failure modes.
#[derive(Debug)]
pub enum DetectorError {
    /// Error occurred during the build phase
    BuildError(String),
    /// Error occurred due to invalid lexicon input
    ValidationError(String),
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuildError(msg) => write!(f, "Build error: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DetectorError {}
