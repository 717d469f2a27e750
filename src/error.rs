//! Error type shared by every stage of the conversion.

use std::path::PathBuf;

/// Coarse classification used by callers to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unparseable input document.
    Input,
    /// Destination could not be written.
    Output,
    /// Nothing sensible to convert with the given settings.
    Configuration,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input {} is not valid XML: {message}", path.display())]
    ParseInput { path: PathBuf, message: String },

    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ReadInput { .. } | Error::ParseInput { .. } => ErrorKind::Input,
            Error::WriteOutput { .. } => ErrorKind::Output,
            Error::Config(_) => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
