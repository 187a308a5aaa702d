//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_DELAY_MS};
pub use types::{Config, Defaults, LoggingConfig, UiConfig};
