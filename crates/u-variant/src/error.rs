//! Errors for the fallible edges of the engine.
//!
//! Generation itself is total and has no error type. Only loading a
//! configuration file can fail.

use thiserror::Error;

/// Errors that can occur when loading or validating an [`EngineConfig`].
///
/// [`EngineConfig`]: crate::config::EngineConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML, or has unknown or mistyped keys.
    #[error("TOML parse error in config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    Validation(String),
}
