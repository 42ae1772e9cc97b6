// src/export/mod.rs
//! Export pipeline for playcount-exporter
//!
//! One format today: the `games_played.json` play-count map.

pub use json::{export_played_games, load_played_games, run, write_played_games, PlayedGamesMap};

pub mod json;

pub type Result<T> = std::result::Result<T, crate::error::ExportError>;
