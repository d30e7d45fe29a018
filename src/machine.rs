//! EnigmaMachine: the cipher engine plus the state a keyboard view needs.
//!
//! Interactive use goes through [`press`](EnigmaMachine::press),
//! [`release`](EnigmaMachine::release) and
//! [`rotor_clicked`](EnigmaMachine::rotor_clicked), each of which notifies the
//! registered observers. Batch use goes through
//! [`encrypt`](EnigmaMachine::encrypt).

use std::fmt;

use tracing::{debug, trace};

use crate::config::{MachineConfig, NUM_ROTORS};
use crate::error::EnigmaError;
use crate::observer::{MachineObserver, MachineSnapshot};
use crate::rotor_bank::RotorBank;
use crate::utils::alphabet::{
    index_to_letter, indices_to_text, letter_to_index, text_to_indices, ALPHABET_SIZE,
};

/// A three-rotor reflecting cipher machine.
///
/// Every keystroke steps the rotors before enciphering, so the machine's
/// output depends on everything typed since it was built. There is no reset:
/// build a fresh machine to start again from a known state.
pub struct EnigmaMachine {
    bank: RotorBank,
    keys_down: [bool; ALPHABET_SIZE],
    lamps_on: [bool; ALPHABET_SIZE],
    observers: Vec<Box<dyn MachineObserver>>,
}

impl Default for EnigmaMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnigmaMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnigmaMachine")
            .field("offsets", &self.bank.offsets())
            .field("keys_down", &self.keys_down)
            .field("lamps_on", &self.lamps_on)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl EnigmaMachine {
    /// Creates a machine with the built-in wiring, all rotors at `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let mut machine = EnigmaMachine::new();
    /// let lit = machine.press('A').unwrap();
    /// assert!(machine.is_lamp_on(lit));
    /// assert_eq!(machine.rotor_letter_at(2).unwrap(), 'B');
    /// ```
    pub fn new() -> Self {
        Self::with_config(&MachineConfig::default())
    }

    /// Creates a machine from a custom wiring config, all rotors at `A`.
    pub fn with_config(config: &MachineConfig) -> Self {
        EnigmaMachine {
            bank: RotorBank::new(config),
            keys_down: [false; ALPHABET_SIZE],
            lamps_on: [false; ALPHABET_SIZE],
            observers: Vec::new(),
        }
    }

    /// Registers a view to be notified after every state change.
    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: MachineObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Notifies every observer once, in registration order.
    pub fn update(&mut self) {
        let snapshot = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer.update(&snapshot);
        }
    }

    /// Current key, lamp and rotor display state.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            keys_down: self.keys_down,
            lamps_on: self.lamps_on,
            rotor_letters: self.rotor_letters(),
        }
    }

    /// Presses a key: steps the rotors, enciphers the letter and lights its lamp.
    ///
    /// Lowercase input is folded to uppercase.
    ///
    /// # Returns
    /// The letter whose lamp is now lit.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] for non-letters. The rotors
    /// are not stepped in that case.
    pub fn press(&mut self, letter: char) -> Result<char, EnigmaError> {
        let input = letter_to_index(letter)?;
        self.bank.step();
        let output = self.bank.encipher_index(input);

        self.keys_down[input] = true;
        self.lamps_on[output] = true;

        let lit = index_to_letter(output);
        trace!(
            key = %index_to_letter(input),
            lamp = %lit,
            offsets = ?self.bank.offsets(),
            "key pressed"
        );
        self.update();
        Ok(lit)
    }

    /// Releases a key and switches every lamp off.
    ///
    /// Only one key is ever down during interactive use, so clearing all lamps
    /// is the same as clearing the one it lit.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] for non-letters.
    pub fn release(&mut self, letter: char) -> Result<(), EnigmaError> {
        let input = letter_to_index(letter)?;
        self.keys_down[input] = false;
        self.lamps_on = [false; ALPHABET_SIZE];

        trace!(key = %index_to_letter(input), "key released");
        self.update();
        Ok(())
    }

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
        self.bank.offset_letter_at(index)
    }

    /// Turns rotor `index` by hand one position. Neighbours do not move.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 2`.
    pub fn rotor_clicked(&mut self, index: usize) -> Result<(), EnigmaError> {
        self.bank.advance_rotor(index)?;
        trace!(rotor = index, offsets = ?self.bank.offsets(), "rotor clicked");
        self.update();
        Ok(())
    }

    /// Encrypts `plaintext` starting from `initial_offsets`.
    ///
    /// `initial_offsets` holds three letters for the slow, medium and fast
    /// rotors. Both strings are folded to uppercase and fully validated before
    /// any rotor moves. Key and lamp state are untouched and observers are not
    /// notified.
    ///
    /// Encryption and decryption are the same operation: a fresh machine
    /// encrypting the ciphertext from the same offsets yields the plaintext.
    /// The rotors are left where the last character put them, so reuse a
    /// machine only if that is what you want.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidOffsets`] if `initial_offsets` is not three letters.
    /// - [`EnigmaError::InvalidCharacter`] if `plaintext` contains a non-letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// let ciphertext = EnigmaMachine::new().encrypt("ABC", "TURINGDIDIT").unwrap();
    /// assert_eq!(ciphertext, "PKCWHMWBHKX");
    ///
    /// let plaintext = EnigmaMachine::new().encrypt("ABC", &ciphertext).unwrap();
    /// assert_eq!(plaintext, "TURINGDIDIT");
    /// ```
    pub fn encrypt(
        &mut self,
        initial_offsets: &str,
        plaintext: &str,
    ) -> Result<String, EnigmaError> {
        let offsets = parse_offsets(initial_offsets)?;
        let input = text_to_indices(plaintext)?;
        debug!(offsets = %initial_offsets, len = input.len(), "encrypting");
        let output = self.encipher_from(offsets, &input);
        Ok(indices_to_text(&output))
    }

    /// Sets the rotor offsets and enciphers already validated letter indices.
    pub(crate) fn encipher_from(
        &mut self,
        offsets: [usize; NUM_ROTORS],
        input: &[usize],
    ) -> Vec<usize> {
        self.bank.set_offsets(offsets);
        input
            .iter()
            .map(|&index| {
                self.bank.step();
                self.bank.encipher_index(index)
            })
            .collect()
    }

    fn rotor_letters(&self) -> [char; NUM_ROTORS] {
        self.bank.offsets().map(index_to_letter)
    }
}

/// Parses a three-letter offset string (slow, medium, fast) into indices.
pub(crate) fn parse_offsets(offsets: &str) -> Result<[usize; NUM_ROTORS], EnigmaError> {
    let invalid = || EnigmaError::InvalidOffsets(offsets.to_string());
    let mut parsed = [0usize; NUM_ROTORS];
    let mut letters = offsets.chars();
    for slot in parsed.iter_mut() {
        let letter = letters.next().ok_or_else(invalid)?;
        *slot = letter_to_index(letter).map_err(|_| invalid())?;
    }
    if letters.next().is_some() {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Renders offset indices (slow, medium, fast) as a three-letter string.
pub(crate) fn format_offsets(offsets: [usize; NUM_ROTORS]) -> String {
    indices_to_text(&offsets)
}
