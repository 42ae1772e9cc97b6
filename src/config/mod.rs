// src/config/mod.rs
//! Configuration system for playcount-exporter
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config};

mod app;
mod defaults;
