//! Engine configuration.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Files are TOML:
//!
//! ```toml
//! max_count = 1000        # boundary clamp on requested variants
//! default_count = 24      # used when the caller gives no count
//! preview_width = 40      # columns kept in preview_text
//! iteration_factor = 8    # novelty search stops after count × factor tries
//!
//! [cache]
//! enabled = true
//! capacity = 256          # entries (LRU)
//! ttl_secs = 300
//! ```
//!
//! | Field              | Default | Constraint            |
//! |--------------------|---------|-----------------------|
//! | `max_count`        | 1000    | ≥ 1                   |
//! | `default_count`    | 24      | ≤ `max_count`         |
//! | `preview_width`    | 40      | ≥ 4                   |
//! | `iteration_factor` | 8       | ≥ 1                   |
//! | `cache.capacity`   | 256     | ≥ 1 when enabled      |

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub max_count: usize,
    pub default_count: usize,
    pub preview_width: usize,
    pub iteration_factor: usize,
    pub cache: CacheConfig,
}

/// Response cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub enabled: bool,
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_count: 1000,
            default_count: 24,
            preview_width: 40,
            iteration_factor: 8,
            cache: CacheConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 256,
            ttl_secs: 300,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 {
            return Err(ConfigError::Validation("max_count must be at least 1".into()));
        }
        if self.default_count > self.max_count {
            return Err(ConfigError::Validation(format!(
                "default_count ({}) exceeds max_count ({})",
                self.default_count, self.max_count
            )));
        }
        if self.preview_width < 4 {
            return Err(ConfigError::Validation("preview_width must be at least 4".into()));
        }
        if self.iteration_factor == 0 {
            return Err(ConfigError::Validation("iteration_factor must be at least 1".into()));
        }
        if self.cache.enabled && self.cache.capacity == 0 {
            return Err(ConfigError::Validation(
                "cache.capacity must be at least 1 when the cache is enabled".into(),
            ));
        }
        Ok(())
    }

    /// Clamp a requested count to `max_count`.
    #[must_use]
    pub fn clamp_count(&self, requested: usize) -> usize {
        if requested > self.max_count {
            tracing::debug!(requested, max = self.max_count, "clamping requested count");
        }
        requested.min(self.max_count)
    }

    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────
