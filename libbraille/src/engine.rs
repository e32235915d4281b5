//! High-level Braille conversion engine
//!
//! Combines the generic `Transcoder` with the English alphabet tables and a
//! conversion history log into the two entry points consumers call:
//! `convert_to_braille` and `convert_to_dots`.
//!
//! The inner transcoder is wrapped in Arc so clones of the engine share the
//! same tables and rendering options.

use std::sync::Arc;

use libbraille_core::{Config, ConversionLog, DotPattern, Transcoder};

use crate::config::BrailleConfig;
use crate::tables::EnglishBraille;

/// Public engine for libbraille.
///
/// Both entry points are total: blank input produces an empty result and no
/// history record. Non-blank input appends one record (input text, glyph
/// string) regardless of which output form was requested; a history failure
/// is logged and never surfaces to the caller.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<Transcoder<EnglishBraille>>,
    log: ConversionLog,
}

impl Engine {
    /// Engine with default rendering options and an in-memory history log.
    pub fn new() -> Self {
        Self::with_log(Config::default(), ConversionLog::new_in_memory())
    }

    /// Engine with explicit rendering options and history backend.
    pub fn with_log(config: Config, log: ConversionLog) -> Self {
        Self {
            inner: Arc::new(Transcoder::with_config(EnglishBraille, config)),
            log,
        }
    }

    /// Build an engine from a `BrailleConfig`, opening the persistent
    /// history backend when a path is configured.
    pub fn from_config(config: BrailleConfig) -> anyhow::Result<Self> {
        let log = match &config.history_path {
            Some(path) => ConversionLog::new_redb(path)?,
            None => ConversionLog::with_capacity(config.history_capacity),
        };
        Ok(Self::with_log(config.into_base(), log))
    }

    /// Convert text into a Unicode Braille glyph string.
    pub fn convert_to_braille(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return String::new();
        }
        let signs = self.inner.scan(input);
        let braille = self.inner.render_glyphs(&signs);
        self.record(input, &braille);
        braille
    }

    /// Convert text into one 6-dot vector per content character.
    ///
    /// The history record always carries the glyph string, so the dots path
    /// renders both forms from the same scan.
    pub fn convert_to_dots(&self, input: &str) -> Vec<DotPattern> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        let signs = self.inner.scan(input);
        let braille = self.inner.render_glyphs(&signs);
        self.record(input, &braille);
        self.inner.render_dots(&signs)
    }

    /// Access the conversion history.
    pub fn history(&self) -> &ConversionLog {
        &self.log
    }

    /// Access the inner transcoder (tables and rendering options).
    pub fn transcoder(&self) -> &Transcoder<EnglishBraille> {
        &self.inner
    }

    fn record(&self, input: &str, braille: &str) {
        if let Err(e) = self.log.record(input, braille) {
            tracing::warn!(error = %e, "failed to append conversion record");
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
