// src/consts.rs
//! Shared constants — the fixed export query

/// The one query this tool runs. `playCounter > 0` also filters out NULL
/// counters (NULL never compares greater than zero in SQLite).
pub const PLAYED_GAMES_QUERY: &str = "SELECT id, playCounter FROM game WHERE playCounter > 0";
