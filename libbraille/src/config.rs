//! Braille-specific configuration that extends the base `Config` from core.
//!
//! The base fields (marker toggles, unknown sentinel) are flattened via
//! serde, so one TOML file configures both the renderer and the history
//! backend:
//!
//! ```toml
//! capital_marker = true
//! number_marker = true
//! unknown_glyph = "?"
//! history_capacity = 500
//! # history_path = "/var/lib/braille/history.redb"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrailleConfig {
    /// Base rendering options (marker toggles, unknown sentinel).
    #[serde(flatten)]
    pub base: libbraille_core::Config,

    /// Capacity bound of the in-memory history log.
    pub history_capacity: usize,

    /// When set, history is persisted to a redb database at this path
    /// instead of being held in memory.
    pub history_path: Option<PathBuf>,
}

impl Default for BrailleConfig {
    fn default() -> Self {
        Self {
            base: libbraille_core::Config::default(),
            history_capacity: 1000,
            history_path: None,
        }
    }
}

impl BrailleConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: BrailleConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Extract the base config for constructing a `Transcoder`.
    pub fn into_base(self) -> libbraille_core::Config {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_markers_enabled() {
        let cfg = BrailleConfig::default();
        assert!(cfg.base.capital_marker);
        assert!(cfg.base.number_marker);
        assert_eq!(cfg.history_capacity, 1000);
        assert!(cfg.history_path.is_none());
    }

    #[test]
    fn toml_roundtrip_with_flattened_base() {
        let mut cfg = BrailleConfig::default();
        cfg.base.number_marker = false;
        cfg.history_capacity = 42;

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: BrailleConfig = toml::from_str(&text).expect("deserialize");
        assert!(!back.base.number_marker);
        assert!(back.base.capital_marker);
        assert_eq!(back.history_capacity, 42);
    }
}
