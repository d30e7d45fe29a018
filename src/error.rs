//! Error types for the rotorcrypt library.

use std::fmt;

/// Reason a wiring table was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringFault {
    /// The table does not contain exactly 26 characters.
    Length(usize),
    /// The table contains a character outside `A`..=`Z`.
    Character(char),
    /// A letter appears more than once, so another one is missing.
    Duplicate(char),
    /// A reflector maps a letter to a partner that does not map back.
    NotInvolution(char),
    /// A reflector maps a letter to itself.
    FixedPoint(char),
}

impl fmt::Display for WiringFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringFault::Length(len) => write!(f, "expected 26 letters, found {}", len),
            WiringFault::Character(c) => write!(f, "character {:?} is not a letter", c),
            WiringFault::Duplicate(c) => write!(f, "letter {} appears more than once", c),
            WiringFault::NotInvolution(c) => {
                write!(f, "letter {} is not paired symmetrically", c)
            }
            WiringFault::FixedPoint(c) => write!(f, "letter {} maps to itself", c),
        }
    }
}

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A rotor or reflector wiring table is not a valid permutation.
    InvalidWiring(WiringFault),
    /// Input contains a character outside `A`..=`Z` after uppercasing.
    InvalidCharacter(char),
    /// The initial offset string is not exactly three letters.
    InvalidOffsets(String),
    /// Rotor index is outside the bank (valid range 0..=2).
    InvalidRotorIndex(usize),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::InvalidWiring(fault) => write!(f, "Invalid wiring table: {}", fault),
            EnigmaError::InvalidCharacter(c) => {
                write!(f, "Character {:?} is outside the A-Z alphabet", c)
            }
            EnigmaError::InvalidOffsets(offsets) => {
                write!(f, "Initial offsets {:?} must be exactly three letters", offsets)
            }
            EnigmaError::InvalidRotorIndex(index) => {
                write!(f, "Rotor index {} is outside the range 0..=2", index)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}

impl From<WiringFault> for EnigmaError {
    fn from(fault: WiringFault) -> Self {
        EnigmaError::InvalidWiring(fault)
    }
}
