//! Letter/index conversion over the 26-letter Latin alphabet.
//!
//! Every component works on letter indices (`A` = 0 .. `Z` = 25). These
//! helpers are the only place characters are folded to uppercase and
//! validated.

use crate::error::EnigmaError;

/// Number of letters on every rotor, reflector and keyboard.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Converts a letter to its alphabet index, folding lowercase to uppercase.
///
/// # Errors
/// Returns [`EnigmaError::InvalidCharacter`] for anything outside `A`..=`Z`
/// after uppercasing. The original character is reported.
pub(crate) fn letter_to_index(letter: char) -> Result<usize, EnigmaError> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Ok((upper as u8 - b'A') as usize)
    } else {
        Err(EnigmaError::InvalidCharacter(letter))
    }
}

/// Converts an alphabet index (taken modulo 26) back to an uppercase letter.
pub(crate) fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_SIZE) as u8) as char
}

/// Converts a whole string to alphabet indices.
///
/// Validation finishes before the caller touches any state, so a bad
/// character anywhere leaves the machine untouched.
pub(crate) fn text_to_indices(text: &str) -> Result<Vec<usize>, EnigmaError> {
    text.chars().map(letter_to_index).collect()
}

/// Converts alphabet indices to an uppercase string.
pub(crate) fn indices_to_text(indices: &[usize]) -> String {
    indices.iter().map(|&i| index_to_letter(i)).collect()
}

/// Returns `(a - b) mod 26` without underflow.
#[inline]
pub(crate) fn sub_mod(a: usize, b: usize) -> usize {
    (a + ALPHABET_SIZE - b % ALPHABET_SIZE) % ALPHABET_SIZE
}
