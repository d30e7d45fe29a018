//! Rotor: a permutation that turns.
//!
//! The wiring table never changes. Rotation is modelled by shifting the
//! incoming contact by the offset before the lookup and shifting the result
//! back afterwards, in both signal directions.

use crate::permutation::Permutation;
use crate::utils::alphabet::{index_to_letter, sub_mod, ALPHABET_SIZE};

/// A wired rotor with a rotational offset in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    offset: usize,
}

impl Rotor {
    /// Creates a rotor at offset 0 (showing `A`).
    pub fn new(wiring: Permutation) -> Self {
        Rotor { wiring, offset: 0 }
    }

    /// Current offset, always in `0..26`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Letter shown in the rotor window.
    pub fn letter(&self) -> char {
        index_to_letter(self.offset)
    }

    /// The rotor's fixed wiring.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }

    /// Sets the offset to `offset mod 26`.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset % ALPHABET_SIZE;
    }

    /// Advances the rotor one position.
    ///
    /// # Returns
    /// `true` iff the rotor wrapped from `Z` back to `A` (the carry signal).
    pub fn advance(&mut self) -> bool {
        self.offset = (self.offset + 1) % ALPHABET_SIZE;
        self.offset == 0
    }

    /// Passes a letter index through the rotor towards the reflector.
    #[inline]
    pub fn transform_forward(&self, index: usize) -> usize {
        let shifted = (index + self.offset) % ALPHABET_SIZE;
        sub_mod(self.wiring.forward_of(shifted), self.offset)
    }

    /// Passes a letter index through the rotor on the way back from the reflector.
    #[inline]
    pub fn transform_backward(&self, index: usize) -> usize {
        let shifted = (index + self.offset) % ALPHABET_SIZE;
        sub_mod(self.wiring.backward_of(shifted), self.offset)
    }
}
