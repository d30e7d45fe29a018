//! Observer seam between the machine and whatever draws it.
//!
//! Views register with [`EnigmaMachine::add_observer`](crate::EnigmaMachine::add_observer)
//! and receive a [`MachineSnapshot`] after every state change. Observers run
//! synchronously, in registration order, once per change.

use crate::config::NUM_ROTORS;
use crate::error::EnigmaError;
use crate::utils::alphabet::{index_to_letter, letter_to_index, ALPHABET_SIZE};

/// Receives machine state after every press, release or rotor click.
pub trait MachineObserver {
    /// Called once per state change with the state after the change.
    fn update(&mut self, snapshot: &MachineSnapshot);
}

impl<F> MachineObserver for F
where
    F: FnMut(&MachineSnapshot),
{
    fn update(&mut self, snapshot: &MachineSnapshot) {
        self(snapshot)
    }
}

/// Everything a view needs to draw the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineSnapshot {
    pub(crate) keys_down: [bool; ALPHABET_SIZE],
    pub(crate) lamps_on: [bool; ALPHABET_SIZE],
    pub(crate) rotor_letters: [char; NUM_ROTORS],
}

impl MachineSnapshot {
    /// Whether the key for `letter` is held. `false` for non-letters.
    pub fn is_key_down(&self, letter: char) -> bool {
        letter_to_index(letter).is_ok_and(|i| self.keys_down[i])
    }

    /// Whether the lamp for `letter` is lit. `false` for non-letters.
    pub fn is_lamp_on(&self, letter: char) -> bool {
        letter_to_index(letter).is_ok_and(|i| self.lamps_on[i])
    }

    /// Letter in the window of rotor `index` (0 slow .. 2 fast).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 2`.
    pub fn rotor_letter_at(&self, index: usize) -> Result<char, EnigmaError> {
        self.rotor_letters
            .get(index)
            .copied()
            .ok_or(EnigmaError::InvalidRotorIndex(index))
    }

    /// All three rotor window letters, slow to fast.
    pub fn rotor_letters(&self) -> [char; NUM_ROTORS] {
        self.rotor_letters
    }

    /// The lit lamp, if any.
    pub fn lit_lamp(&self) -> Option<char> {
        self.lamps_on
            .iter()
            .position(|&on| on)
            .map(index_to_letter)
    }
}
