//! Error types for clubtui.
//!
//! `thiserror` hierarchy: domain errors convert into [`AppError`] via
//! `From` so `?` composes through the call stack.
//!
//! Most "failures" in this application are not errors at all: malformed
//! form input becomes an inline field message, and deck records with a
//! blank question or answer are skipped with a warning at load time.
//! The variants here cover the genuinely fatal cases (unreadable deck,
//! broken terminal) plus export I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Deck file could not be read or parsed. Fatal: there is nothing to
    /// browse without a deck.
    #[error("Failed to load deck: {0}")]
    Data(#[from] DataError),

    /// Export artifact could not be written. Non-fatal to the session;
    /// surfaced in the status line.
    #[error("Failed to export deck: {0}")]
    Export(#[from] ExportError),

    /// Terminal or rendering failure in the crossterm/ratatui layer.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading or parsing the deck file.
#[derive(Debug, Error)]
pub enum DataError {
    /// The deck path does not exist.
    #[error("Deck file not found: {path}")]
    FileNotFound {
        /// Path the user supplied.
        path: PathBuf,
    },

    /// The deck file is not valid JSON for the expected schema.
    #[error("Invalid deck file {path}: {message}")]
    InvalidDeck {
        /// Path that failed to parse.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// Every record in the deck was skipped (blank question or answer).
    #[error("Deck {path} contains no usable FAQ entries")]
    EmptyDeck {
        /// Path of the offending deck.
        path: PathBuf,
    },

    /// Generic I/O failure reading the deck.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors writing the export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization failed (should not happen for plain records).
    #[error("Failed to serialize export records: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The export file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
