//! libbraille-core
//!
//! Generic Braille transcoding engine, cell model, configuration and
//! conversion history shared by script-specific crates (libbraille).
//!
//! The transcoder itself is script-agnostic: it implements the per-character
//! classification scan (whitespace, digits, letters, punctuation, unknown)
//! and the number/capital indicator state machine, and delegates the actual
//! character-to-cell lookups to an `Alphabet` implementation supplied by the
//! script crate.
//!
//! Public API:
//! - `Cell`, `DotPattern` - one Braille cell as glyph + 6-dot vector
//! - `Sign` - the shared intermediate representation of one scan step
//! - `Alphabet` - lookup seam implemented by script crates
//! - `Transcoder` - classification scan and the two renderers
//! - `ConversionLog`, `ConversionRecord` - history of performed conversions
//! - `Config` - rendering options and TOML load/save
use serde::{Deserialize, Serialize};

pub mod cell;
pub use cell::{Cell, DotPattern, BLANK_PATTERN};

pub mod transcoder;
pub use transcoder::{digit_to_letter, Alphabet, Sign, Transcoder};

pub mod history;
pub use history::{ConversionLog, ConversionRecord, InMemoryLog, RedbLog};

/// Rendering options for the glyph output mode.
///
/// Script-specific options belong in the script crate's config (see
/// `BrailleConfig` in libbraille); this struct only carries fields the
/// generic renderer understands.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Emit the capital indicator before uppercase letters.
    /// Disable for displays that render lowercase only.
    pub capital_marker: bool,

    /// Emit the number indicator before digit runs.
    pub number_marker: bool,

    /// Sentinel glyph for characters without a cell in the alphabet.
    pub unknown_glyph: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capital_marker: true,
            number_marker: true,
            unknown_glyph: '?',
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
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

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim surrounding whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}
