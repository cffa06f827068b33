//! # Code 39 Symbology
//!
//! Maps text to the unit-level bit pattern of a Code 39 barcode.
//!
//! ## Encoding
//!
//! Each character is 9 elements (5 bars, 4 spaces), 3 of them wide. Written
//! out in narrow units (narrow = 1, wide = 2) that is 12 units, stored here
//! as a string over `{0, 1}` where `1` is a bar unit and `0` a space unit.
//!
//! ```text
//! ┌──────────────┬───┬─────────┬───┬─────────┬───┬──────────────┐
//! │ start (*)    │ 0 │ char 1  │ 0 │ char n  │ 0 │ stop (*)     │
//! │ 12 units     │   │ 12 units│   │ 12 units│   │ 12 units     │
//! └──────────────┴───┴─────────┴───┴─────────┴───┴──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use code39::symbology::{encode, START_STOP};
//!
//! let bits = encode("a1").unwrap();
//! assert_eq!(bits.len(), 13 + 13 * 2 + 12);
//! assert!(bits.as_str().starts_with(START_STOP));
//! ```

use std::fmt;

use crate::error::{Code39Error, Result};

/// Start/stop sentinel (`*`). Brackets every message, never encodable.
pub const START_STOP: &str = "100101101101";

/// Units per character pattern.
pub const PATTERN_UNITS: usize = 12;

/// Narrow space emitted after the start sentinel and after every character.
const GAP: char = '0';

/// The 43 encodable characters and their unit patterns.
pub const ALPHABET: [(char, &str); 43] = [
    ('0', "101001101101"),
    ('1', "110100101011"),
    ('2', "101100101011"),
    ('3', "110110010101"),
    ('4', "101001101011"),
    ('5', "110100110101"),
    ('6', "101100110101"),
    ('7', "101001011011"),
    ('8', "110100101101"),
    ('9', "101100101101"),
    ('A', "110101001011"),
    ('B', "101101001011"),
    ('C', "110110100101"),
    ('D', "101011001011"),
    ('E', "110101100101"),
    ('F', "101101100101"),
    ('G', "101010011011"),
    ('H', "110101001101"),
    ('I', "101101001101"),
    ('J', "101011001101"),
    ('K', "110101010011"),
    ('L', "101101010011"),
    ('M', "110110101001"),
    ('N', "101011010011"),
    ('O', "110101101001"),
    ('P', "101101101001"),
    ('Q', "101010110011"),
    ('R', "110101011001"),
    ('S', "101101011001"),
    ('T', "101011011001"),
    ('U', "110010101011"),
    ('V', "100110101011"),
    ('W', "110011010101"),
    ('X', "100101101011"),
    ('Y', "110010110101"),
    ('Z', "100110110101"),
    ('-', "100101011011"),
    ('.', "110010101101"),
    (' ', "100110101101"),
    ('$', "100100100101"),
    ('/', "100100101001"),
    ('+', "100101001001"),
    ('%', "101001001001"),
];

/// Look up the pattern for an already-uppercased character.
pub fn pattern(ch: char) -> Option<&'static str> {
    ALPHABET
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, pattern)| *pattern)
}

/// Whether `ch` can be encoded (case-insensitive).
pub fn is_supported(ch: char) -> bool {
    uppercase(ch).and_then(pattern).is_some()
}

/// Single-char uppercase mapping. Characters that expand to several chars
/// (e.g. `ß` → `SS`) have no Code 39 form.
fn uppercase(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// Encoded unit sequence of a complete barcode, sentinels included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedBits(String);

impl EncodedBits {
    /// Number of units.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no units. Never true for output of
    /// [`encode`], which always carries both sentinels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Units in order, `true` = bar.
    pub fn units(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }
}

impl AsRef<str> for EncodedBits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode `content` as Code 39 units.
///
/// Input is case-insensitive. Fails on the first character without a
/// pattern; no partial sequence is returned.
pub fn encode(content: &str) -> Result<EncodedBits> {
    let count = content.chars().count();
    let mut bits = String::with_capacity(2 * PATTERN_UNITS + 1 + count * (PATTERN_UNITS + 1));

    bits.push_str(START_STOP);
    bits.push(GAP);

    for (position, ch) in content.chars().enumerate() {
        let pattern = uppercase(ch)
            .and_then(pattern)
            .ok_or(Code39Error::UnsupportedCharacter {
                character: ch,
                position,
            })?;
        bits.push_str(pattern);
        bits.push(GAP);
    }

    bits.push_str(START_STOP);

    log::debug!("encoded {} chars into {} units", count, bits.len());
    Ok(EncodedBits(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alphabet_patterns_are_well_formed() {
        for (ch, pattern) in ALPHABET {
            assert_eq!(pattern.len(), PATTERN_UNITS, "{ch:?}");
            assert!(pattern.bytes().all(|b| b == b'0' || b == b'1'), "{ch:?}");
            // Every pattern starts and ends on a bar
            assert!(pattern.starts_with('1') && pattern.ends_with('1'), "{ch:?}");
        }
    }

    #[test]
    fn test_alphabet_patterns_are_unique() {
        for (i, (a, pa)) in ALPHABET.iter().enumerate() {
            assert_ne!(*pa, START_STOP, "{a:?} collides with the sentinel");
            for (b, pb) in &ALPHABET[i + 1..] {
                assert_ne!(pa, pb, "{a:?} and {b:?} share a pattern");
            }
        }
    }

    #[test]
    fn test_single_character() {
        for (ch, pattern) in ALPHABET {
            let bits = encode(&ch.to_string()).unwrap();
            let expected = format!("{START_STOP}0{pattern}0{START_STOP}");
            assert_eq!(bits.as_str(), expected);
            assert_eq!(bits.len(), 38);
        }
    }

    #[test]
    fn test_empty_content() {
        let bits = encode("").unwrap();
        assert_eq!(bits.as_str(), format!("{START_STOP}0{START_STOP}"));
        assert_eq!(bits.len(), 25);
        assert!(!bits.is_empty());
    }

    #[test]
    fn test_length_invariant() {
        for content in ["", "A", "HELLO", "CODE 39-$/+%.", "0123456789"] {
            let bits = encode(content).unwrap();
            assert_eq!(bits.len(), 13 + 13 * content.len() + 12, "{content:?}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        let upper = encode("AB").unwrap();
        assert_eq!(encode("ab").unwrap(), upper);
        assert_eq!(encode("Ab").unwrap(), upper);
    }

    #[test]
    fn test_lowercase_accepted() {
        assert!(encode("a").is_ok());
        assert!(is_supported('z'));
    }

    #[test]
    fn test_unsupported_characters() {
        for ch in ['#', '@', '*', 'é', 'ß', '\n', '_'] {
            let err = encode(&format!("A{ch}B")).unwrap_err();
            assert_eq!(
                err,
                Code39Error::UnsupportedCharacter {
                    character: ch,
                    position: 1
                }
            );
            assert!(!is_supported(ch));
        }
    }

    #[test]
    fn test_first_bad_character_reported() {
        let err = encode("OK#@").unwrap_err();
        assert_eq!(
            err,
            Code39Error::UnsupportedCharacter {
                character: '#',
                position: 2
            }
        );
    }

    #[test]
    fn test_position_counts_chars() {
        let err = encode("éA").unwrap_err();
        assert_eq!(
            err,
            Code39Error::UnsupportedCharacter {
                character: 'é',
                position: 0
            }
        );
    }

    #[test]
    fn test_pattern_lookup_is_case_sensitive() {
        assert_eq!(pattern('A'), Some("110101001011"));
        assert_eq!(pattern('a'), None);
        assert_eq!(pattern('*'), None);
    }

    #[test]
    fn test_units_iterator() {
        let bits = encode("").unwrap();
        let units: Vec<bool> = bits.units().take(4).collect();
        assert_eq!(units, vec![true, false, false, true]);
        assert_eq!(bits.units().filter(|&u| u).count(), 14);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(encode("CODE39").unwrap(), encode("CODE39").unwrap());
        assert_eq!(encode("CODE39").unwrap().to_string(), encode("code39").unwrap().as_str());
    }
}
