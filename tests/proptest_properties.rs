//! Property-based tests for the cipher's algebraic properties.
//!
//! These tests verify that the wiring tables are bijections, the reflector is
//! a fixed-point-free involution, a bank at a fixed position is its own
//! inverse, and encryption with matching offsets round-trips.

use proptest::prelude::*;

use rotorcrypt::{
    EnigmaMachine, MachineConfig, Permutation, RotorBank, STANDARD_REFLECTOR, STANDARD_ROTORS,
};

fn offsets_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Shuffles the alphabet into an arbitrary wiring string.
fn wiring_strategy() -> impl Strategy<Value = String> {
    Just(('A'..='Z').collect::<Vec<char>>())
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn permutation_backward_inverts_forward(wiring in wiring_strategy()) {
        let p = Permutation::new(&wiring).unwrap();
        for i in 0..26 {
            prop_assert_eq!(p.backward_of(p.forward_of(i)), i);
            prop_assert_eq!(p.forward_of(p.backward_of(i)), i);
        }
        prop_assert_eq!(p.forward_wiring(), wiring);
    }

    #[test]
    fn bank_is_self_inverse_at_fixed_offsets(
        slow in 0usize..26,
        medium in 0usize..26,
        fast in 0usize..26,
        letter in 0usize..26,
    ) {
        let mut bank = RotorBank::new(&MachineConfig::default());
        bank.set_offsets([slow, medium, fast]);
        let c = bank.encipher_index(letter);
        prop_assert_ne!(c, letter);
        prop_assert_eq!(bank.encipher_index(c), letter);
    }

    #[test]
    fn encrypt_round_trips(offsets in offsets_strategy(), plaintext in "[A-Z]{0,64}") {
        let ciphertext = EnigmaMachine::new().encrypt(&offsets, &plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        let decrypted = EnigmaMachine::new().encrypt(&offsets, &ciphertext).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn encrypt_round_trips_with_custom_rotors(
        slow in wiring_strategy(),
        medium in wiring_strategy(),
        fast in wiring_strategy(),
        offsets in offsets_strategy(),
        plaintext in "[A-Z]{1,32}",
    ) {
        let config = MachineConfig::from_wirings(
            [slow.as_str(), medium.as_str(), fast.as_str()],
            &STANDARD_REFLECTOR.permutation().forward_wiring(),
        ).unwrap();
        let ciphertext = EnigmaMachine::with_config(&config).encrypt(&offsets, &plaintext).unwrap();
        let decrypted = EnigmaMachine::with_config(&config).encrypt(&offsets, &ciphertext).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn lowercase_input_matches_uppercase(offsets in offsets_strategy(), plaintext in "[a-z]{1,32}") {
        let lower = EnigmaMachine::new().encrypt(&offsets.to_lowercase(), &plaintext).unwrap();
        let upper = EnigmaMachine::new().encrypt(&offsets, &plaintext.to_uppercase()).unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn non_letters_never_move_the_rotors(offsets in offsets_strategy(), bad in "[0-9 .,!?-]") {
        let mut machine = EnigmaMachine::new();
        let plaintext = format!("AB{}CD", bad);
        prop_assert!(machine.encrypt(&offsets, &plaintext).is_err());
        prop_assert_eq!(machine.snapshot().rotor_letters(), ['A', 'A', 'A']);
    }
}

#[test]
fn standard_reflector_is_fixed_point_free_involution() {
    for i in 0..26 {
        let r = STANDARD_REFLECTOR.reflect(i);
        assert_ne!(r, i);
        assert_eq!(STANDARD_REFLECTOR.reflect(r), i);
    }
}

#[test]
fn standard_rotors_are_bijections() {
    for rotor in STANDARD_ROTORS.iter() {
        let mut seen = [false; 26];
        for i in 0..26 {
            seen[rotor.forward_of(i)] = true;
            assert_eq!(rotor.backward_of(rotor.forward_of(i)), i);
        }
        assert!(seen.iter().all(|&s| s));
    }
}

#[test]
fn stepping_changes_the_lamp_for_repeated_letters() {
    let mut machine = EnigmaMachine::new();
    let lamps: Vec<char> = (0..26).map(|_| machine.press('E').unwrap()).collect();
    let distinct = lamps.iter().collect::<std::collections::HashSet<_>>().len();
    assert!(distinct > 1, "pressing E 26 times lit only {:?}", lamps);
    assert_ne!(lamps[0], lamps[1]);
}
