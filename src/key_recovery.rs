//! KeyRecovery: brute-force search for the initial rotor offsets.
//!
//! Given a plaintext and its ciphertext, tries all 26^3 = 17,576 offset
//! triples. Every trial runs on a freshly built machine: a machine keeps the
//! offsets its last character left behind, so reusing one across trials would
//! start each trial from the wrong position.

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{MachineConfig, NUM_ROTORS};
use crate::error::EnigmaError;
use crate::machine::{format_offsets, EnigmaMachine};
use crate::utils::alphabet::{text_to_indices, ALPHABET_SIZE};

/// Size of the offset search space.
pub const NUM_CANDIDATES: usize = ALPHABET_SIZE * ALPHABET_SIZE * ALPHABET_SIZE;

/// Outcome of a key search. Exhausting the space is a normal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySearch {
    /// The first matching offset triple, slow to fast, e.g. `"ABC"`.
    Found(String),
    /// No offset triple maps the plaintext to the ciphertext.
    NotFound,
}

impl KeySearch {
    /// The recovered offsets, if any.
    pub fn offsets(&self) -> Option<&str> {
        match self {
            KeySearch::Found(offsets) => Some(offsets),
            KeySearch::NotFound => None,
        }
    }

    /// Whether a match was found.
    pub fn is_found(&self) -> bool {
        matches!(self, KeySearch::Found(_))
    }
}

impl fmt::Display for KeySearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySearch::Found(offsets) => f.write_str(offsets),
            KeySearch::NotFound => f.write_str("not found"),
        }
    }
}

/// Brute-force offset search over machines built from one config.
#[derive(Debug, Clone, Default)]
pub struct KeyRecovery {
    config: MachineConfig,
}

impl KeyRecovery {
    /// Creates a search that builds its trial machines from `config`.
    pub fn new(config: MachineConfig) -> Self {
        KeyRecovery { config }
    }

    /// Finds the first offset triple that encrypts `plaintext` to `ciphertext`.
    ///
    /// Candidates are visited slow rotor outermost, fast rotor innermost
    /// (`AAA`, `AAB`, ..., `ZZZ`). Both texts are folded to uppercase.
    ///
    /// # Returns
    /// [`KeySearch::Found`] with the first match, or [`KeySearch::NotFound`]
    /// after all 17,576 candidates have been tried.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] if either text contains a
    /// non-letter. No search is run in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{KeyRecovery, KeySearch};
    ///
    /// let search = KeyRecovery::default();
    /// let found = search.find_initial_offsets("TURINGDIDIT", "PKCWHMWBHKX").unwrap();
    /// assert_eq!(found, KeySearch::Found("ABC".to_string()));
    /// ```
    pub fn find_initial_offsets(
        &self,
        plaintext: &str,
        ciphertext: &str,
    ) -> Result<KeySearch, EnigmaError> {
        let plain = text_to_indices(plaintext)?;
        let cipher = text_to_indices(ciphertext)?;
        debug!(len = plain.len(), "starting sequential key search");

        for candidate in 0..NUM_CANDIDATES {
            if self.trial(candidate, &plain, &cipher) {
                let offsets = format_offsets(candidate_offsets(candidate));
                info!(offsets = %offsets, checked = candidate + 1, "key search matched");
                return Ok(KeySearch::Found(offsets));
            }
        }

        info!(checked = NUM_CANDIDATES, "key search exhausted");
        Ok(KeySearch::NotFound)
    }

    /// Parallel form of [`find_initial_offsets`](Self::find_initial_offsets).
    ///
    /// The space is split across the rayon thread pool. Each worker builds its
    /// own machines and only reads the shared config. When several triples
    /// match, the lexicographically smallest wins, so the answer is the same
    /// as the sequential search.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] if either text contains a
    /// non-letter.
    pub fn find_initial_offsets_parallel(
        &self,
        plaintext: &str,
        ciphertext: &str,
    ) -> Result<KeySearch, EnigmaError> {
        let plain = text_to_indices(plaintext)?;
        let cipher = text_to_indices(ciphertext)?;
        debug!(
            len = plain.len(),
            threads = rayon::current_num_threads(),
            "starting parallel key search"
        );

        let outcome = (0..NUM_CANDIDATES)
            .into_par_iter()
            .find_first(|&candidate| self.trial(candidate, &plain, &cipher))
            .map(|candidate| KeySearch::Found(format_offsets(candidate_offsets(candidate))))
            .unwrap_or(KeySearch::NotFound);

        info!(outcome = %outcome, "parallel key search finished");
        Ok(outcome)
    }

    /// Encrypts `plain` on a brand-new machine from `candidate` and compares.
    fn trial(&self, candidate: usize, plain: &[usize], cipher: &[usize]) -> bool {
        let mut machine = EnigmaMachine::with_config(&self.config);
        machine.encipher_from(candidate_offsets(candidate), plain) == cipher
    }
}

/// Finds the initial offsets using the built-in wiring.
///
/// Shorthand for `KeyRecovery::default().find_initial_offsets(..)`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidCharacter`] if either text contains a
/// non-letter.
pub fn find_initial_offsets(plaintext: &str, ciphertext: &str) -> Result<KeySearch, EnigmaError> {
    KeyRecovery::default().find_initial_offsets(plaintext, ciphertext)
}

/// Maps a candidate number in `0..17576` to offsets, slow to fast.
fn candidate_offsets(candidate: usize) -> [usize; NUM_ROTORS] {
    [
        candidate / (ALPHABET_SIZE * ALPHABET_SIZE),
        (candidate / ALPHABET_SIZE) % ALPHABET_SIZE,
        candidate % ALPHABET_SIZE,
    ]
}
