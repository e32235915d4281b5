// libbraille/src/tables.rs
//
// Static cell tables for uncontracted (Grade 1) English Braille.
//
// Each entry defines both payloads of a cell at once: the Unicode glyph
// (U+2800 block) and the 6-dot vector in dot order 1..6. Keeping them side
// by side in one table is what stops the glyph output and the dot output
// from drifting apart.
//
// Layout of the dot vector relative to the physical cell:
//   +---+---+
//   | 1 | 4 |
//   | 2 | 5 |
//   | 3 | 6 |
//   +---+---+

use std::collections::HashMap;

use libbraille_core::{Alphabet, Cell, DotPattern};
use once_cell::sync::Lazy;

/// Capital indicator (dot 6). Glyph-only: it has no dot-pattern counterpart
/// in the tactile output.
pub const CAPITAL_MARK: char = '\u{2820}';

/// Number indicator (dots 3,4,5,6). Glyph-only, like the capital mark.
pub const NUMBER_MARK: char = '\u{283C}';

/// Letters a-z. Digits reuse this table through the a..j wheel, so there is
/// no separate digit table.
const LETTERS: [(char, char, DotPattern); 26] = [
    ('a', '⠁', [1, 0, 0, 0, 0, 0]),
    ('b', '⠃', [1, 1, 0, 0, 0, 0]),
    ('c', '⠉', [1, 0, 0, 1, 0, 0]),
    ('d', '⠙', [1, 0, 0, 1, 1, 0]),
    ('e', '⠑', [1, 0, 0, 0, 1, 0]),
    ('f', '⠋', [1, 1, 0, 1, 0, 0]),
    ('g', '⠛', [1, 1, 0, 1, 1, 0]),
    ('h', '⠓', [1, 1, 0, 0, 1, 0]),
    ('i', '⠊', [0, 1, 0, 1, 0, 0]),
    ('j', '⠚', [0, 1, 0, 1, 1, 0]),
    ('k', '⠅', [1, 0, 1, 0, 0, 0]),
    ('l', '⠇', [1, 1, 1, 0, 0, 0]),
    ('m', '⠍', [1, 0, 1, 1, 0, 0]),
    ('n', '⠝', [1, 0, 1, 1, 1, 0]),
    ('o', '⠕', [1, 0, 1, 0, 1, 0]),
    ('p', '⠏', [1, 1, 1, 1, 0, 0]),
    ('q', '⠟', [1, 1, 1, 1, 1, 0]),
    ('r', '⠗', [1, 1, 1, 0, 1, 0]),
    ('s', '⠎', [0, 1, 1, 1, 0, 0]),
    ('t', '⠞', [0, 1, 1, 1, 1, 0]),
    ('u', '⠥', [1, 0, 1, 0, 0, 1]),
    ('v', '⠧', [1, 1, 1, 0, 0, 1]),
    ('w', '⠺', [0, 1, 0, 1, 1, 1]),
    ('x', '⠭', [1, 0, 1, 1, 0, 1]),
    ('y', '⠽', [1, 0, 1, 1, 1, 1]),
    ('z', '⠵', [1, 0, 1, 0, 1, 1]),
];

/// Punctuation cells.
///
/// The glyph payloads are the standard cells. The dot payloads are
/// deliberately coarse: comma, question mark and exclamation mark all
/// collapse to the single dot-2 vector. This mirrors the tactile rendering
/// this table was transcribed from and is a known fidelity gap against full
/// Braille punctuation; substitute the accurate vectors intentionally if a
/// display needs them.
static PUNCTUATION: Lazy<HashMap<char, Cell>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert('.', Cell::new('⠲', [0, 1, 0, 0, 1, 1]));
    m.insert(',', Cell::new('⠂', [0, 1, 0, 0, 0, 0]));
    m.insert('?', Cell::new('⠦', [0, 1, 0, 0, 0, 0]));
    m.insert('!', Cell::new('⠖', [0, 1, 0, 0, 0, 0]));
    m.insert('-', Cell::new('⠤', [0, 0, 1, 0, 0, 1]));
    m.insert(';', Cell::new('⠆', [0, 1, 1, 0, 0, 0]));
    m.insert(':', Cell::new('⠒', [0, 1, 0, 0, 1, 0]));
    m.insert('\'', Cell::new('⠄', [0, 0, 1, 0, 0, 0]));
    m.insert('"', Cell::new('⠶', [0, 1, 1, 0, 1, 1]));

    m
});

static LETTER_CELLS: Lazy<HashMap<char, Cell>> = Lazy::new(|| {
    LETTERS
        .iter()
        .map(|&(ch, glyph, dots)| (ch, Cell::new(glyph, dots)))
        .collect()
});

/// The uncontracted English Braille alphabet.
///
/// Stateless view over the static tables above; cheap to copy and safe to
/// share, since the tables are initialized once and never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishBraille;

impl Alphabet for EnglishBraille {
    fn letter(&self, ch: char) -> Option<Cell> {
        LETTER_CELLS.get(&ch).copied()
    }

    fn punctuation(&self, ch: char) -> Option<Cell> {
        PUNCTUATION.get(&ch).copied()
    }

    fn capital_mark(&self) -> char {
        CAPITAL_MARK
    }

    fn number_mark(&self) -> char {
        NUMBER_MARK
    }
}
