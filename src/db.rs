// src/db.rs
//! Source database connection handling

use rusqlite::{Connection, OpenFlags};
use std::env;
use tracing::debug;

use crate::error::ExportError;
use crate::export::Result;

/// Open the Flashpoint game database read-only.
///
/// Read-only matters here: the default open flags create an empty
/// database at a missing path instead of failing, and an exporter never
/// writes its source.
pub fn open_game_db() -> Result<Connection> {
    let config = crate::config::load();

    // Allow full test isolation via env vars
    let db_path = env::var("PCX_SOURCE_DB").unwrap_or_else(|_| config.paths.source_db.clone());
    debug!("opening source database {db_path}");

    Connection::open_with_flags(
        &db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(ExportError::SourceUnavailable)
}
