//! libbraille crate root
//!
//! Uncontracted (Grade 1) English Braille transcoding built on
//! `libbraille-core`. This crate supplies the English cell tables and a
//! high-level `Engine` that composes the generic transcoder with a
//! conversion history log.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `BrailleConfig` from `config`
//! - `EnglishBraille` and the indicator marks from `tables`
//!
//! ```
//! use libbraille::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.convert_to_braille("Hi 5"), "⠠⠓⠊ ⠼⠑");
//! assert_eq!(engine.convert_to_dots("hi").len(), 2);
//! ```

pub mod config;
pub mod engine;
pub mod tables;

// Convenience re-exports for common types used by callers.
pub use config::BrailleConfig;
pub use engine::Engine;
pub use tables::{EnglishBraille, CAPITAL_MARK, NUMBER_MARK};

// Re-export the core model types so most callers need only this crate.
pub use libbraille_core::{
    Alphabet, Cell, Config, ConversionLog, ConversionRecord, DotPattern, Sign, Transcoder,
    BLANK_PATTERN,
};
