// src/config/defaults.rs
use crate::config::app::Paths;

pub const DEFAULT_SOURCE_DB: &str = "flashpoint.sqlite";
pub const DEFAULT_OUTPUT_JSON: &str = "games_played.json";

pub fn default_paths() -> Paths {
    Paths {
        source_db: DEFAULT_SOURCE_DB.into(),
        output_json: DEFAULT_OUTPUT_JSON.into(),
    }
}
