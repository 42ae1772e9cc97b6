// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// One variant per export stage: connect, query, write.
///
/// `rusqlite::Error` carries no `#[from]` on purpose — the stage that
/// produced it decides whether the source was unavailable or merely
/// missing the expected schema.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot open source database: {0}")]
    SourceUnavailable(#[source] rusqlite::Error),

    #[error("source database does not match the expected schema: {0}")]
    SchemaMismatch(#[source] rusqlite::Error),

    #[error("cannot write output file: {0}")]
    OutputWrite(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
