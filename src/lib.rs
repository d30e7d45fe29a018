//! Three-rotor reflecting cipher machine.
//!
//! rotorcrypt simulates a rotor cipher in the style of the Enigma: three
//! wired rotors that step like an odometer on every keystroke, and a
//! reflector that sends the signal back through them. Because the reflector
//! is an involution, encryption and decryption are the same operation.
//!
//! # Architecture
//!
//! ```text
//! Permutation  (fixed wiring + cached inverse)
//!     ↓ owned by
//! Rotor        (wiring + offset, shift-lookup-unshift in both directions)
//!     ↓ three of them, plus a Reflector
//! RotorBank    (odometer stepping, fast → slow → reflect → slow → fast)
//!     ↓ driven by
//! EnigmaMachine (press/release/encrypt, key & lamp state, observers)
//!     ↓ rebuilt per trial by
//! KeyRecovery  (brute force over all 17,576 offset triples)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with matching offsets:
//!
//! ```
//! use rotorcrypt::EnigmaMachine;
//!
//! let ciphertext = EnigmaMachine::new().encrypt("ABC", "TURINGDIDIT").unwrap();
//! let plaintext = EnigmaMachine::new().encrypt("ABC", &ciphertext).unwrap();
//! assert_eq!(plaintext, "TURINGDIDIT");
//! ```
//!
//! Recover the offsets from a known plaintext:
//!
//! ```
//! use rotorcrypt::{find_initial_offsets, KeySearch};
//!
//! let found = find_initial_offsets("TURINGDIDIT", "PKCWHMWBHKX").unwrap();
//! assert_eq!(found, KeySearch::Found("ABC".to_string()));
//! ```
//!
//! Drive the machine interactively and watch it from a view:
//!
//! ```
//! use rotorcrypt::{EnigmaMachine, MachineSnapshot};
//!
//! let mut machine = EnigmaMachine::new();
//! machine.add_observer(|snapshot: &MachineSnapshot| {
//!     let _ = snapshot.rotor_letters();
//! });
//! let lit = machine.press('A').unwrap();
//! assert!(machine.is_lamp_on(lit));
//! machine.release('A').unwrap();
//! assert!(!machine.is_lamp_on(lit));
//! ```

#![deny(clippy::all)]

pub mod error;

mod config;
mod key_recovery;
mod machine;
mod observer;
mod permutation;
mod reflector;
mod rotor;
mod rotor_bank;
pub(crate) mod utils;

pub use config::{MachineConfig, NUM_ROTORS, STANDARD_REFLECTOR, STANDARD_ROTORS};
pub use error::{EnigmaError, WiringFault};
pub use key_recovery::{find_initial_offsets, KeyRecovery, KeySearch, NUM_CANDIDATES};
pub use machine::EnigmaMachine;
pub use observer::{MachineObserver, MachineSnapshot};
pub use permutation::Permutation;
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use rotor_bank::{RotorBank, FAST, MEDIUM, SLOW};
