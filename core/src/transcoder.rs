// core/src/transcoder.rs
//
// Generic Braille transcoder that works with any alphabet.
// One classification scan feeds both output renderers, so the glyph string
// and the dot-pattern sequence can never disagree on how a character was
// classified.

use crate::cell::{Cell, DotPattern, BLANK_PATTERN};
use crate::Config;

/// Lookup seam implemented by script crates (e.g. `EnglishBraille` in
/// libbraille). Tests seed tiny hand-built alphabets through the same trait.
pub trait Alphabet {
    /// Cell for a lowercase letter, if the alphabet defines it.
    fn letter(&self, ch: char) -> Option<Cell>;

    /// Cell for a punctuation character, if the alphabet defines it.
    fn punctuation(&self, ch: char) -> Option<Cell>;

    /// Glyph of the capital indicator (dot 6).
    fn capital_mark(&self) -> char {
        '\u{2820}'
    }

    /// Glyph of the number indicator (dots 3,4,5,6).
    fn number_mark(&self) -> char {
        '\u{283C}'
    }
}

/// One step of the classification scan. Both renderers consume this shared
/// representation; `NumberMark` and `CapitalMark` are glyph-only artifacts
/// with no dot-pattern counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Preserved line break. Renders as a literal `\n` / an all-zero vector.
    Newline,
    /// Space, tab or other non-newline whitespace.
    Space,
    /// Number indicator emitted before a digit run.
    NumberMark,
    /// Capital indicator emitted before an uppercase letter.
    CapitalMark,
    /// A content cell from the alphabet.
    Cell(Cell),
    /// Character without a cell in the alphabet.
    Unknown,
}

/// Map a digit to the letter whose cell it reuses: '1'..'9' wheel onto
/// 'a'..'i', and '0' onto 'j'.
pub fn digit_to_letter(digit: char) -> Option<char> {
    match digit {
        '1'..='9' => Some((b'a' + (digit as u8 - b'1')) as char),
        '0' => Some('j'),
        _ => None,
    }
}

/// Script-agnostic transcoder.
///
/// Holds only the alphabet and rendering options; all scan state (the number
/// mode flag) is local to each call, so a shared `Transcoder` is safe to use
/// from multiple threads concurrently.
#[derive(Debug, Clone)]
pub struct Transcoder<A> {
    alphabet: A,
    config: Config,
}

impl<A: Alphabet> Transcoder<A> {
    /// Create a transcoder with default rendering options.
    pub fn new(alphabet: A) -> Self {
        Self::with_config(alphabet, Config::default())
    }

    /// Create a transcoder with explicit rendering options.
    pub fn with_config(alphabet: A, config: Config) -> Self {
        Self { alphabet, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// Classification scan: one pass, left to right, with the number-mode
    /// flag as the only carried state.
    ///
    /// Rules, in order:
    /// 1. `\r` is dropped (CRLF normalization).
    /// 2. `\n` emits `Newline` and leaves number mode.
    /// 3. Other whitespace emits `Space` and leaves number mode.
    /// 4. An ASCII digit entering number mode emits `NumberMark` first, then
    ///    the cell of the letter it wheels onto.
    /// 5. Anything else leaves number mode before classification.
    /// 6. An uppercase letter emits `CapitalMark` first; letters then map via
    ///    the alphabet, falling back to `Unknown`.
    /// 7. Everything else maps via the punctuation table or `Unknown`.
    pub fn scan(&self, input: &str) -> Vec<Sign> {
        let mut signs = Vec::with_capacity(input.len());
        let mut number_mode = false;

        for ch in input.chars() {
            if ch == '\r' {
                continue;
            }
            if ch == '\n' {
                signs.push(Sign::Newline);
                number_mode = false;
                continue;
            }
            if ch.is_whitespace() {
                signs.push(Sign::Space);
                number_mode = false;
                continue;
            }
            if ch.is_ascii_digit() {
                if !number_mode {
                    signs.push(Sign::NumberMark);
                    number_mode = true;
                }
                let sign = digit_to_letter(ch)
                    .and_then(|letter| self.alphabet.letter(letter))
                    .map_or(Sign::Unknown, Sign::Cell);
                signs.push(sign);
                continue;
            }

            number_mode = false;

            if ch.is_alphabetic() {
                if ch.is_uppercase() {
                    signs.push(Sign::CapitalMark);
                }
                let lower = ch.to_lowercase().next().unwrap_or(ch);
                let sign = self
                    .alphabet
                    .letter(lower)
                    .map_or(Sign::Unknown, Sign::Cell);
                signs.push(sign);
            } else {
                let sign = self
                    .alphabet
                    .punctuation(ch)
                    .map_or(Sign::Unknown, Sign::Cell);
                signs.push(sign);
            }
        }

        signs
    }

    /// Render a scanned sign sequence as a Unicode Braille glyph string.
    ///
    /// Indicator marks render here and only here; the `capital_marker` and
    /// `number_marker` options suppress them without touching the scan.
    pub fn render_glyphs(&self, signs: &[Sign]) -> String {
        let mut out = String::with_capacity(signs.len());
        for sign in signs {
            match sign {
                Sign::Newline => out.push('\n'),
                Sign::Space => out.push(' '),
                Sign::NumberMark => {
                    if self.config.number_marker {
                        out.push(self.alphabet.number_mark());
                    }
                }
                Sign::CapitalMark => {
                    if self.config.capital_marker {
                        out.push(self.alphabet.capital_mark());
                    }
                }
                Sign::Cell(cell) => out.push(cell.glyph),
                Sign::Unknown => out.push(self.config.unknown_glyph),
            }
        }
        out
    }

    /// Render a scanned sign sequence as dot vectors: exactly one vector per
    /// content character. Indicator marks are skipped, never padded with a
    /// vector, because tactile consumers expect one cell per character.
    pub fn render_dots(&self, signs: &[Sign]) -> Vec<DotPattern> {
        let mut out = Vec::with_capacity(signs.len());
        for sign in signs {
            match sign {
                Sign::Newline | Sign::Space | Sign::Unknown => out.push(BLANK_PATTERN),
                Sign::NumberMark | Sign::CapitalMark => {}
                Sign::Cell(cell) => out.push(cell.dots),
            }
        }
        out
    }

    /// Convenience: scan and render as a glyph string.
    pub fn glyph_string(&self, input: &str) -> String {
        self.render_glyphs(&self.scan(input))
    }

    /// Convenience: scan and render as dot vectors.
    pub fn dot_patterns(&self, input: &str) -> Vec<DotPattern> {
        self.render_dots(&self.scan(input))
    }
}
