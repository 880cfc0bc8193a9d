use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type covering the different failure cases that can occur when the
/// tool fetches, normalises, or exports record inventories.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the host data feed reports a failed handshake or delivery.
    #[error("host feed error: {0}")]
    Feed(String),

    /// Raised when a column key matches no field on the display rows.
    #[error("no row field bound to column key '{key}'")]
    UnknownColumn { key: String },

    /// Raised when the save collaborator rejects the exported artifact.
    #[error("file save rejected: {0}")]
    Save(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
