pub mod args;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod summarizer;
pub mod ui;
