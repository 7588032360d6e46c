/*!
 * Error types for the podex application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a timed-text transcript
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// A time string that is not 1-3 colon-separated numeric groups
    #[error("Malformed timecode: {raw:?}")]
    MalformedTimecode {
        /// The offending input string
        raw: String,
    },

    /// A caption line of four or more characters that does not match the sentence-cue pattern
    #[error("Malformed caption line {line_number}: {content:?}")]
    MalformedCaptionLine {
        /// 1-based line number within the normalized caption stream
        line_number: usize,
        /// The offending line content
        content: String,
    },
}

/// Errors that can occur while reading the Podcasts library catalog
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The library database file is missing
    #[error("Library database not found at {0:?}")]
    DatabaseNotFound(PathBuf),

    /// Error opening the database or running a query
    #[error("Library query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the library catalog
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    /// Error from transcript conversion
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
