// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub source_db: String,
    pub output_json: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load the global config once. An absent config file is the normal case
/// (the tool is meant to run bare inside a Flashpoint directory), so the
/// built-in defaults apply without comment.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("PCX_CONFIG").unwrap_or_else(|_| "export-config.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read export-config.toml");
            toml::from_str(&content).expect("Invalid TOML in export-config.toml")
        } else {
            Config {
                paths: default_paths(),
            }
        }
    })
}
