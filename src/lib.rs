// src/lib.rs
//! playcount-exporter — Flashpoint play-count JSON export
//!
//! Reads the `game` table from a Flashpoint SQLite database and writes
//! `games_played.json`: a map of game id → play count covering every
//! game that has been played at least once.

pub mod config;
pub mod consts;
pub mod db;
pub mod error;
pub mod export;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use db::open_game_db;
pub use error::ExportError;
pub use export::{export_played_games, run, PlayedGamesMap, Result as ExportResult};
