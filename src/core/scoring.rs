//! Letter tile values
//!
//! Standard letter-tile point table used to rank anagram results.

/// Point value of a single letter tile
///
/// Lowercase letters score like their uppercase form; anything else is worth 0.
#[must_use]
pub const fn tile_value(letter: u8) -> u32 {
    match letter.to_ascii_uppercase() {
        b'A' | b'E' | b'I' | b'O' | b'U' | b'L' | b'N' | b'S' | b'T' | b'R' => 1,
        b'D' | b'G' => 2,
        b'B' | b'C' | b'M' | b'P' => 3,
        b'F' | b'H' | b'V' | b'W' | b'Y' => 4,
        b'K' => 5,
        b'J' | b'X' => 8,
        b'Q' | b'Z' => 10,
        _ => 0,
    }
}

/// Sum of the tile values of every letter in `letters`
///
/// # Examples
/// ```
/// use wordhelp::core::word_value;
///
/// assert_eq!(word_value(b"QUIZ"), 10 + 1 + 1 + 10);
/// ```
#[must_use]
pub fn word_value(letters: &[u8]) -> u32 {
    letters.iter().map(|&l| tile_value(l)).sum()
}
