use std::{fmt::Display, path::PathBuf};

#[derive(Debug)]
pub enum ScoreError {
    IoError(std::io::Error),
    DictionaryWalking(walkdir::Error),
    Regex(regex::Error),
    RootNotFound(PathBuf),
    NoReportGenerated(PathBuf),
    IndexMissing(PathBuf),
    SummaryBlockNotFound,
    InsufficientPercentages(usize),
    ScoreDropped { previous: f64, current: f64 },
    VerificationMismatch { expected: String, actual: String },
    InvalidArgument(String),
}

impl std::error::Error for ScoreError {}

impl Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::IoError(io_error) => write!(f, "{}", io_error),
            ScoreError::DictionaryWalking(error) => write!(f, "{}", error),
            ScoreError::Regex(error) => write!(f, "{}", error),
            ScoreError::RootNotFound(root) => {
                write!(f, "Report folder not found: {}", root.display())
            }
            ScoreError::NoReportGenerated(root) => {
                write!(f, "No PIT reports were generated in {}.", root.display())
            }
            ScoreError::IndexMissing(path) => {
                write!(f, "Cannot find index.html in {}", path.display())
            }
            ScoreError::SummaryBlockNotFound => {
                write!(f, "Could not find summary table with Mutation Coverage.")
            }
            ScoreError::InsufficientPercentages(found) => write!(
                f,
                "Could not read the mutation coverage score. Found {} percentages, expected at least 2.",
                found
            ),
            ScoreError::ScoreDropped { previous, current } => write!(
                f,
                "Mutation score went down: previous={:.2}% current={:.2}%",
                previous, current
            ),
            ScoreError::VerificationMismatch { expected, actual } => {
                write!(f, "Expected {}%, got {}%", expected, actual)
            }
            ScoreError::InvalidArgument(error) => write!(f, "{}", error),
        }
    }
}

impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<walkdir::Error> for ScoreError {
    fn from(value: walkdir::Error) -> Self {
        Self::DictionaryWalking(value)
    }
}

impl From<regex::Error> for ScoreError {
    fn from(value: regex::Error) -> Self {
        Self::Regex(value)
    }
}
