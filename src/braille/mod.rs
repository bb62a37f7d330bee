//! Braille text validation and decoding
//!
//! Turns Unicode Braille characters (U+2800..=U+28FF) into dot sets that
//! the layout engine can place on the canvas.

pub mod decode;
pub mod dots;

pub use decode::{decode, decode_str, encode, is_braille, BRAILLE_BASE, BRAILLE_LAST};
pub use dots::DotSet;

/// Whitespace accepted between Braille cells.
///
/// Space separators (Zs), the ASCII whitespace controls, the line and
/// paragraph separators and U+FEFF. Unlike `char::is_whitespace` this
/// accepts a byte order mark and rejects NEL (U+0085).
pub fn is_cell_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Check whether a string is non-empty Braille text.
///
/// Every character must be a separator (see [`is_cell_separator`]) or a
/// Braille pattern, and at least one character must be present.
pub fn is_braille_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_cell_separator(c) || is_braille(c))
}
