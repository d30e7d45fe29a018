//! Permutation: the fixed letter wiring of a rotor.
//!
//! A permutation stores its forward table and the inverse derived from it at
//! construction (`backward[forward[i]] = i`), so both directions through a
//! rotor are single array lookups.

use crate::error::{EnigmaError, WiringFault};
use crate::utils::alphabet::{index_to_letter, ALPHABET_SIZE};

/// A bijection over the 26-letter alphabet with its cached inverse.
///
/// Immutable once built and `Copy`, so the same wiring can be handed to any
/// number of rotors or machines by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permutation {
    forward: [u8; ALPHABET_SIZE],
    backward: [u8; ALPHABET_SIZE],
}

impl Permutation {
    /// Builds a permutation from a wiring string.
    ///
    /// The character at position `i` is the image of letter `i` (`A` = 0).
    /// Lowercase letters are accepted and folded to uppercase.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string is not exactly 26
    /// characters long, contains a non-letter, or repeats a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Permutation;
    ///
    /// let p = Permutation::new("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    /// assert_eq!(p.forward_of(0), 1);
    /// assert_eq!(p.backward_of(0), 25);
    ///
    /// assert!(Permutation::new("AABCDEFGHIJKLMNOPQRSTUVWXY").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let len = wiring.chars().count();
        if len != ALPHABET_SIZE {
            return Err(WiringFault::Length(len).into());
        }

        let mut forward = [0u8; ALPHABET_SIZE];
        let mut backward = [0u8; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];
        for (i, c) in wiring.chars().enumerate() {
            let upper = c.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(WiringFault::Character(c).into());
            }
            let target = upper as u8 - b'A';
            if seen[target as usize] {
                return Err(WiringFault::Duplicate(upper).into());
            }
            seen[target as usize] = true;
            forward[i] = target;
            backward[target as usize] = i as u8;
        }

        Ok(Permutation { forward, backward })
    }

    /// Builds a permutation from an uppercase byte table in `const` context.
    ///
    /// Used for the built-in wiring tables: an invalid table fails to compile.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) if the table contains
    /// a byte outside `b'A'..=b'Z'` or repeats a letter.
    pub const fn from_static(wiring: &[u8; ALPHABET_SIZE]) -> Self {
        let mut forward = [0u8; ALPHABET_SIZE];
        let mut backward = [0u8; ALPHABET_SIZE];
        let mut seen = [false; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let c = wiring[i];
            if !c.is_ascii_uppercase() {
                panic!("wiring table must contain only A-Z");
            }
            let target = (c - b'A') as usize;
            if seen[target] {
                panic!("wiring table repeats a letter");
            }
            seen[target] = true;
            forward[i] = target as u8;
            backward[target] = i as u8;
            i += 1;
        }
        Permutation { forward, backward }
    }

    /// Image of `index` under the forward wiring.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub const fn forward_of(&self, index: usize) -> usize {
        self.forward[index] as usize
    }

    /// Image of `index` under the inverse wiring.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub const fn backward_of(&self, index: usize) -> usize {
        self.backward[index] as usize
    }

    /// Returns the inverse permutation as a value of its own.
    pub fn inverse(&self) -> Permutation {
        Permutation {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Renders the forward table as a 26-letter string.
    pub fn forward_wiring(&self) -> String {
        self.forward.iter().map(|&i| index_to_letter(i as usize)).collect()
    }

    /// Renders the inverse table as a 26-letter string.
    pub fn backward_wiring(&self) -> String {
        self.backward.iter().map(|&i| index_to_letter(i as usize)).collect()
    }
}
