//! The six-dot cell pattern
//!
//! Dots are numbered the standard way:
//!
//! ```text
//! 1 4
//! 2 5
//! 3 6
//! ```

use std::fmt;

/// Mask of the six standard dots; bits 6 and 7 belong to 8-dot Braille.
pub const SIX_DOT_MASK: u8 = 0b0011_1111;

/// The set of raised dots in one Braille cell.
///
/// Stored as a 6-bit mask, so it can never hold more than six dots or a
/// dot index outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DotSet(u8);

impl DotSet {
    /// A blank cell
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from an 8-bit cell pattern, dropping the 8-dot extension bits
    pub const fn from_pattern(pattern: u8) -> Self {
        Self(pattern & SIX_DOT_MASK)
    }

    /// Build from dot numbers; anything outside `1..=6` is ignored
    pub fn from_dots(dots: &[u8]) -> Self {
        dots.iter()
            .filter(|d| (1..=6).contains(*d))
            .fold(Self::empty(), |set, d| Self(set.0 | 1 << (d - 1)))
    }

    /// Raw 6-bit mask (bit `i` is dot `i + 1`)
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, dot: u8) -> bool {
        (1..=6).contains(&dot) && self.0 & (1 << (dot - 1)) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raised dots in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=6u8).filter(move |&d| self.contains(d))
    }
}

impl fmt::Display for DotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = self
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{{{}}}", dots)
    }
}
