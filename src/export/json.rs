// src/export/json.rs
use rusqlite::Connection;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::{env, fs};
use tracing::debug;

use crate::consts::PLAYED_GAMES_QUERY;
use crate::db::open_game_db;
use crate::error::ExportError;
use crate::export::Result;

/// Game id → play count. Serializes as a JSON object with decimal string
/// keys; ascending id order keeps repeat exports byte-identical.
pub type PlayedGamesMap = BTreeMap<i64, i64>;

/// Run the fixed play-count query and fold the rows into a map.
///
/// Duplicate ids collapse to the last row in result order.
pub fn load_played_games(conn: &Connection) -> Result<PlayedGamesMap> {
    let mut stmt = conn
        .prepare(PLAYED_GAMES_QUERY)
        .map_err(ExportError::SchemaMismatch)?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?, // id
                row.get::<_, i64>(1)?, // playCounter
            ))
        })
        .map_err(ExportError::SchemaMismatch)?;

    let mut played = PlayedGamesMap::new();
    for row in rows {
        let (id, play_counter) = row.map_err(ExportError::SchemaMismatch)?;
        played.insert(id, play_counter);
    }

    debug!("loaded {} played game(s)", played.len());
    Ok(played)
}

/// Serialize the map with 4-space indentation and overwrite `path`.
pub fn write_played_games(played: &PlayedGamesMap, path: &str) -> Result<()> {
    // The output format is four-space indented; serde_json's default
    // pretty printer indents by two.
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    played.serialize(&mut ser)?;

    fs::write(path, buf)?;
    Ok(())
}

/// Export every played game from the source database to `output_path`.
///
/// The connection is released before the output write begins; a failure
/// in any earlier stage leaves the output file untouched.
pub fn export_played_games(output_path: &str) -> Result<()> {
    let conn = open_game_db()?;
    let played = load_played_games(&conn)?;
    drop(conn);

    write_played_games(&played, output_path)?;
    println!("Data successfully written to {output_path}");

    Ok(())
}

/// Full export against the configured paths. This is what the
/// `export_playcounts` binary calls.
pub fn run() -> Result<()> {
    let config = crate::config::load();
    let output_path =
        env::var("PCX_OUTPUT_JSON").unwrap_or_else(|_| config.paths.output_json.clone());
    export_played_games(&output_path)
}
