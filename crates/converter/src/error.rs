//! Error — the engine's error taxonomy.
//!
//! Structural errors (missing input, pattern that does not compile) abort a
//! conversion and surface to the caller. Per-line anomalies (no match, a
//! group that did not participate) are never errors; they are represented as
//! data by the line converter.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file path does not exist at call time. Nothing is written.
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    /// The spec's normalized expression fails to compile. Nothing is read.
    #[error("Pattern '{name}' is not a valid regex: {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}
