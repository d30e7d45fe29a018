//! RotorBank: three rotors, an odometer and the full signal path.
//!
//! Rotors are ordered slow (0), medium (1), fast (2). Stepping always starts
//! at the fast rotor and carries leftwards. The signal enters at the fast
//! rotor, is reflected after the slow rotor, and leaves through the fast
//! rotor again.

use crate::config::{MachineConfig, NUM_ROTORS};
use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Index of the slowest rotor.
pub const SLOW: usize = 0;
/// Index of the middle rotor.
pub const MEDIUM: usize = 1;
/// Index of the fastest rotor.
pub const FAST: usize = 2;

/// Three rotors plus the reflector they share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorBank {
    rotors: [Rotor; NUM_ROTORS],
    reflector: Reflector,
}

impl RotorBank {
    /// Builds a bank from `config` with every rotor at offset 0.
    pub fn new(config: &MachineConfig) -> Self {
        let wirings = config.rotors();
        RotorBank {
            rotors: [
                Rotor::new(wirings[SLOW]),
                Rotor::new(wirings[MEDIUM]),
                Rotor::new(wirings[FAST]),
            ],
            reflector: *config.reflector(),
        }
    }

    /// Advances the bank like an odometer.
    ///
    /// The fast rotor always moves. The medium rotor moves when the fast one
    /// wraps, the slow rotor when the medium one wraps. A slow wrap is
    /// dropped.
    pub fn step(&mut self) {
        if self.rotors[FAST].advance() && self.rotors[MEDIUM].advance() {
            self.rotors[SLOW].advance();
        }
    }

    /// Runs one letter through the rotors, the reflector and back.
    ///
    /// Does not step; callers step exactly once before each character.
    pub fn encipher_index(&self, index: usize) -> usize {
        let mut signal = index;
        for rotor in self.rotors.iter().rev() {
            signal = rotor.transform_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.transform_backward(signal);
        }
        signal
    }

    /// Letter shown in the window of rotor `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 2`.
    pub fn offset_letter_at(&self, index: usize) -> Result<char, EnigmaError> {
        self.rotor(index).map(Rotor::letter)
    }

    /// Advances a single rotor by one without carrying into its neighbour.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 2`.
    pub fn advance_rotor(&mut self, index: usize) -> Result<(), EnigmaError> {
        let rotor = self
            .rotors
            .get_mut(index)
            .ok_or(EnigmaError::InvalidRotorIndex(index))?;
        rotor.advance();
        Ok(())
    }

    /// Sets all three offsets, slow to fast. Each is reduced modulo 26.
    pub fn set_offsets(&mut self, offsets: [usize; NUM_ROTORS]) {
        for (rotor, offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
    }

    /// Current offsets, slow to fast.
    pub fn offsets(&self) -> [usize; NUM_ROTORS] {
        [
            self.rotors[SLOW].offset(),
            self.rotors[MEDIUM].offset(),
            self.rotors[FAST].offset(),
        ]
    }

    /// Rotor at `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 2`.
    pub fn rotor(&self, index: usize) -> Result<&Rotor, EnigmaError> {
        self.rotors
            .get(index)
            .ok_or(EnigmaError::InvalidRotorIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alphabet::ALPHABET_SIZE;

    fn bank() -> RotorBank {
        RotorBank::new(&MachineConfig::default())
    }

    #[test]
    fn test_new_bank_at_aaa() {
        let bank = bank();
        assert_eq!(bank.offsets(), [0, 0, 0]);
        for i in 0..NUM_ROTORS {
            assert_eq!(bank.offset_letter_at(i).unwrap(), 'A');
        }
    }

    #[test]
    fn test_single_step_moves_fast_only() {
        let mut bank = bank();
        bank.step();
        assert_eq!(bank.offsets(), [0, 0, 1]);
    }

    #[test]
    fn test_carry_after_26_steps() {
        let mut bank = bank();
        for _ in 0..26 {
            bank.step();
        }
        assert_eq!(bank.offsets(), [0, 1, 0]);
    }

    #[test]
    fn test_carry_after_676_steps() {
        let mut bank = bank();
        for _ in 0..676 {
            bank.step();
        }
        assert_eq!(bank.offsets(), [1, 0, 0]);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut bank = bank();
        for _ in 0..ALPHABET_SIZE.pow(3) {
            bank.step();
        }
        assert_eq!(bank.offsets(), [0, 0, 0]);
    }

    #[test]
    fn test_slow_wrap_is_dropped() {
        let mut bank = bank();
        bank.set_offsets([25, 25, 25]);
        bank.step();
        assert_eq!(bank.offsets(), [0, 0, 0]);
    }

    #[test]
    fn test_no_double_stepping() {
        let mut bank = bank();
        bank.set_offsets([0, 4, 25]);
        bank.step();
        assert_eq!(bank.offsets(), [0, 5, 0]);
        bank.step();
        assert_eq!(bank.offsets(), [0, 5, 1]);
    }

    #[test]
    fn test_encipher_first_keystroke() {
        // After one step from AAA, A lights Z.
        let mut bank = bank();
        bank.step();
        assert_eq!(bank.encipher_index(0), 25);
    }

    #[test]
    fn test_encipher_is_self_inverse_at_fixed_position() {
        let mut bank = bank();
        for offsets in [[0, 0, 0], [1, 2, 3], [25, 13, 7], [9, 0, 24]] {
            bank.set_offsets(offsets);
            for i in 0..ALPHABET_SIZE {
                let c = bank.encipher_index(i);
                assert_ne!(c, i, "letter {} enciphered to itself at {:?}", i, offsets);
                assert_eq!(bank.encipher_index(c), i);
            }
        }
    }

    #[test]
    fn test_encipher_does_not_step() {
        let mut bank = bank();
        bank.set_offsets([3, 4, 5]);
        bank.encipher_index(7);
        assert_eq!(bank.offsets(), [3, 4, 5]);
    }

    #[test]
    fn test_advance_rotor_has_no_carry() {
        let mut bank = bank();
        bank.set_offsets([0, 0, 25]);
        bank.advance_rotor(FAST).unwrap();
        assert_eq!(bank.offsets(), [0, 0, 0]);
        bank.advance_rotor(SLOW).unwrap();
        assert_eq!(bank.offset_letter_at(SLOW).unwrap(), 'B');
    }

    #[test]
    fn test_invalid_rotor_index() {
        let mut bank = bank();
        assert_eq!(
            bank.offset_letter_at(3),
            Err(EnigmaError::InvalidRotorIndex(3))
        );
        assert_eq!(bank.advance_rotor(7), Err(EnigmaError::InvalidRotorIndex(7)));
        assert_eq!(bank.offsets(), [0, 0, 0]);
    }
}
