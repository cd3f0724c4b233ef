//! Error types for header generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a file into a header.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but cannot be opened for reading.
    #[error("input file {} is not readable", .0.display())]
    InputNotReadable(PathBuf),

    /// The directory that should hold the output does not exist.
    #[error("output directory {} does not exist", .0.display())]
    OutputDirNotFound(PathBuf),

    /// The directory that should hold the output is read-only.
    #[error("output directory {} is not writable", .0.display())]
    OutputDirNotWritable(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was raised by path validation, before any byte was read or written.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type for header generation.
pub type Result<T> = std::result::Result<T, Error>;
