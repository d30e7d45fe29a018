//! Machine configuration: the wiring tables every machine is built from.

use crate::error::EnigmaError;
use crate::permutation::Permutation;
use crate::reflector::Reflector;

/// Number of rotors in a bank.
pub const NUM_ROTORS: usize = 3;

/// Built-in rotor wirings, slow (index 0) to fast (index 2).
pub const STANDARD_ROTORS: [Permutation; NUM_ROTORS] = [
    Permutation::from_static(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
    Permutation::from_static(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
    Permutation::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
];

/// Built-in reflector wiring.
pub const STANDARD_REFLECTOR: Reflector = Reflector::from_static(b"IXUHFEZDAOMTKQJWNSRLCYPBVG");

/// Validated wiring for one machine: three rotors and a reflector.
///
/// The tables are immutable `Copy` values, so a single config can seed any
/// number of machines, including machines on other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    rotors: [Permutation; NUM_ROTORS],
    reflector: Reflector,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: STANDARD_ROTORS,
            reflector: STANDARD_REFLECTOR,
        }
    }
}

impl MachineConfig {
    /// Creates a config from already validated tables.
    pub fn new(rotors: [Permutation; NUM_ROTORS], reflector: Reflector) -> Self {
        MachineConfig { rotors, reflector }
    }

    /// Parses and validates custom wiring strings.
    ///
    /// # Parameters
    /// - `rotors`: slow, medium and fast rotor wirings.
    /// - `reflector`: reflector wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] for the first table that is not a
    /// bijection, or if the reflector is not a fixed-point-free involution.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::MachineConfig;
    ///
    /// let config = MachineConfig::from_wirings(
    ///     [
    ///         "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    ///         "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    ///         "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    ///     ],
    ///     "IXUHFEZDAOMTKQJWNSRLCYPBVG",
    /// )
    /// .unwrap();
    /// assert_eq!(config, MachineConfig::default());
    /// ```
    pub fn from_wirings(
        rotors: [&str; NUM_ROTORS],
        reflector: &str,
    ) -> Result<Self, EnigmaError> {
        let rotors = [
            Permutation::new(rotors[0])?,
            Permutation::new(rotors[1])?,
            Permutation::new(rotors[2])?,
        ];
        let reflector = Reflector::new(reflector)?;
        Ok(MachineConfig { rotors, reflector })
    }

    /// Rotor wirings, slow to fast.
    pub fn rotors(&self) -> &[Permutation; NUM_ROTORS] {
        &self.rotors
    }

    /// Reflector wiring.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }
}
