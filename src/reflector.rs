//! Reflector: the fixed involution that turns the signal around.

use crate::error::{EnigmaError, WiringFault};
use crate::permutation::Permutation;
use crate::utils::alphabet::{index_to_letter, ALPHABET_SIZE};

/// A self-inverse permutation with no fixed points.
///
/// Because `reflect(reflect(x)) == x`, only the forward table is ever
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Builds a reflector from a wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string is not a valid
    /// permutation, if some letter is not paired symmetrically, or if some
    /// letter maps to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Reflector;
    ///
    /// let r = Reflector::new("IXUHFEZDAOMTKQJWNSRLCYPBVG").unwrap();
    /// assert_eq!(r.reflect(0), 8);
    /// assert_eq!(r.reflect(8), 0);
    ///
    /// // A rotation is a permutation but not an involution.
    /// assert!(Reflector::new("BCDEFGHIJKLMNOPQRSTUVWXYZA").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = Permutation::new(wiring)?;
        for i in 0..ALPHABET_SIZE {
            let partner = wiring.forward_of(i);
            if partner == i {
                return Err(WiringFault::FixedPoint(index_to_letter(i)).into());
            }
            if wiring.forward_of(partner) != i {
                return Err(WiringFault::NotInvolution(index_to_letter(i)).into());
            }
        }
        Ok(Reflector { wiring })
    }

    /// Builds a reflector from an uppercase byte table in `const` context.
    ///
    /// # Panics
    /// Panics (at compile time when used in a `const`) if the table is not an
    /// involution without fixed points.
    pub const fn from_static(wiring: &[u8; ALPHABET_SIZE]) -> Self {
        let wiring = Permutation::from_static(wiring);
        let mut i = 0;
        while i < ALPHABET_SIZE {
            let partner = wiring.forward_of(i);
            if partner == i {
                panic!("reflector maps a letter to itself");
            }
            if wiring.forward_of(partner) != i {
                panic!("reflector is not an involution");
            }
            i += 1;
        }
        Reflector { wiring }
    }

    /// Sends letter `index` through the reflector.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    #[inline]
    pub fn reflect(&self, index: usize) -> usize {
        self.wiring.forward_of(index)
    }

    /// The underlying wiring.
    pub fn permutation(&self) -> &Permutation {
        &self.wiring
    }
}
