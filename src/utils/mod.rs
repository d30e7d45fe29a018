//! Shared helpers for the cipher components.

pub(crate) mod alphabet;
