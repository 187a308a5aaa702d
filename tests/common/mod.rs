//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use study_summarizer::clipboard::MemoryClipboard;
use study_summarizer::config::Config;
use study_summarizer::ui::app::App;
use tempfile::TempDir;

/// App wired to an in-memory clipboard the test can inspect.
pub fn make_app() -> (App, MemoryClipboard) {
    make_app_with(&Config::default())
}

pub fn make_app_with(config: &Config) -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let app = App::new(config, Box::new(clipboard.clone()));
    (app, clipboard)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
