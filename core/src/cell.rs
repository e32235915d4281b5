// core/src/cell.rs
//
// The canonical per-character Braille cell definition.
//
// Historically the glyph table and the dot-pattern table were maintained as
// two independent mappings, which let them drift apart. Here both payloads
// live in one `Cell` so an alphabet defines each character exactly once.
// The payloads are still independent data: for punctuation the dot vector is
// deliberately coarser than the glyph (see the script crate's tables), so
// neither side is derived from the other.

/// One 6-dot vector. Index 0 is dot 1, index 5 is dot 6; a value of 1 means
/// the dot is raised.
pub type DotPattern = [u8; 6];

/// The all-lowered vector, used for blanks and the unknown sentinel.
pub const BLANK_PATTERN: DotPattern = [0; 6];

/// One Braille cell: the Unicode glyph (U+2800..U+28FF) and the 6-dot vector
/// a tactile display would raise for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub dots: DotPattern,
}

impl Cell {
    pub const fn new(glyph: char, dots: DotPattern) -> Self {
        Self { glyph, dots }
    }

    /// Number of raised dots in this cell.
    pub fn raised(&self) -> usize {
        self.dots.iter().filter(|&&d| d != 0).count()
    }
}
