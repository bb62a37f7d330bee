//! Braille code point decoding

use crate::error::{Diagnostic, InvalidCodepoint};

use super::DotSet;

/// First code point of the Unicode Braille Patterns block
pub const BRAILLE_BASE: u32 = 0x2800;

/// Last code point of the Unicode Braille Patterns block
pub const BRAILLE_LAST: u32 = 0x28FF;

/// Check whether a character lies in the Braille Patterns block
pub fn is_braille(ch: char) -> bool {
    (BRAILLE_BASE..=BRAILLE_LAST).contains(&(ch as u32))
}

/// Decode one Braille character into its raised dots.
///
/// Bit `i` of `ch - U+2800` raises dot `i + 1`. Bits 6 and 7 (dots 7 and 8
/// of computer Braille) are read but not part of the result.
pub fn decode(ch: char) -> Result<DotSet, InvalidCodepoint> {
    if !is_braille(ch) {
        return Err(InvalidCodepoint { ch });
    }
    let pattern = (ch as u32 - BRAILLE_BASE) as u8;
    Ok(DotSet::from_pattern(pattern))
}

/// Decode every character of a string.
///
/// Always yields one cell per `char`, so the layout keeps a slot for each
/// input character. Characters outside the Braille block (whitespace
/// included) become blank cells and are reported as diagnostics.
pub fn decode_str(input: &str) -> (Vec<DotSet>, Vec<Diagnostic>) {
    let mut cells = Vec::with_capacity(input.len() / 3);
    let mut diagnostics = Vec::new();

    for (index, ch) in input.chars().enumerate() {
        match decode(ch) {
            Ok(dots) => cells.push(dots),
            Err(error) => {
                log::trace!("cell {}: {}", index, error);
                diagnostics.push(Diagnostic { index, error });
                cells.push(DotSet::empty());
            }
        }
    }

    (cells, diagnostics)
}

/// The six-dot Braille character for a dot set
pub fn encode(dots: DotSet) -> char {
    // U+2800..=U+283F are all assigned scalar values
    char::from_u32(BRAILLE_BASE + u32::from(dots.bits())).unwrap_or('\u{2800}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_blank() {
        assert_eq!(decode('\u{2800}').unwrap(), DotSet::empty());
    }

    #[test]
    fn test_decode_full_cell() {
        let dots = decode('\u{28FF}').unwrap();
        assert_eq!(dots.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_dots_one_and_two() {
        let dots = decode('⠃').unwrap();
        assert_eq!(dots.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_decode_ignores_eight_dot_bits() {
        // U+28C0 raises only dots 7 and 8
        assert!(decode('\u{28C0}').unwrap().is_empty());
        assert_eq!(decode('\u{2841}').unwrap(), DotSet::from_dots(&[1]));
    }

    #[test]
    fn test_dot_count_matches_low_six_bits() {
        for cp in BRAILLE_BASE..=BRAILLE_LAST {
            let ch = char::from_u32(cp).unwrap();
            let expected = ((cp - BRAILLE_BASE) & 0x3F).count_ones() as usize;
            assert_eq!(decode(ch).unwrap().len(), expected, "U+{:04X}", cp);
        }
    }

    #[test]
    fn test_decode_outside_block() {
        let err = decode('x').unwrap_err();
        assert_eq!(err.ch, 'x');
        assert!(decode('\u{27FF}').is_err());
        assert!(decode('\u{2900}').is_err());
    }

    #[test]
    fn test_decode_str_keeps_slot_for_invalid() {
        let (cells, diagnostics) = decode_str("x⠃ ");
        assert_eq!(cells.len(), 3);
        assert!(cells[0].is_empty());
        assert_eq!(cells[1], DotSet::from_dots(&[1, 2]));
        assert!(cells[2].is_empty());
        let indices: Vec<usize> = diagnostics.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(DotSet::from_dots(&[1, 2])), '⠃');
        assert_eq!(encode(DotSet::empty()), '\u{2800}');
        assert_eq!(decode(encode(DotSet::from_dots(&[2, 4, 6]))).unwrap().bits(), 0b10_1010);
    }
}
