use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Fatal extraction failures. Any of these ends the run.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("could not open '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading line {line_no} of '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        line_no: usize,
        #[source]
        source: io::Error,
    },

    /// The requested column does not exist on this line.
    #[error("Exiting: there is no column {column} in line {line_no}: '{line}'")]
    ColumnIndex {
        line_no: usize,
        column: usize,
        line: String,
    },

    #[error("failed writing diagnostics: {0}")]
    Diagnostics(#[source] io::Error),
}

/// A field that is not a number. Recoverable: the line is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError {
    pub line_no: usize,
    pub text: String,
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping line {}: could not convert '{}' to float",
            self.line_no, self.text
        )
    }
}

impl std::error::Error for FieldParseError {}
