//! Generation settings.
//!
//! A [`GenerationConfig`] always holds a length inside
//! [`MIN_LENGTH`]..=[`MAX_LENGTH`]: every constructor and setter clamps, so the
//! generator never has to validate its input.

use crate::charset::CharClass;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Desired password length plus the optional character classes.
///
/// Lowercase letters are always part of the pool and cannot be switched off,
/// so every combination of flags (including all `false`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GenerationConfig {
    /// Build a config, clamping `length` into the supported range.
    pub fn new(
        length: usize,
        include_uppercase: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length: clamp_length(length),
            include_uppercase,
            include_numbers,
            include_symbols,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamped. Returns the value actually stored.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = clamp_length(length);
        self.length
    }

    /// Whether `class` contributes to the pool under this config.
    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => true,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Digits => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    /// Active classes in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.includes(*class))
    }

    /// The alphabet implied by the flags: lowercase, then uppercase, digits and
    /// symbols when enabled. Never empty.
    pub fn alphabet(&self) -> String {
        self.classes().map(CharClass::chars).collect()
    }

    /// Number of characters in [`alphabet`](Self::alphabet).
    pub fn pool_size(&self) -> usize {
        self.classes().map(CharClass::size).sum()
    }
}

/// Clamp `length` into `MIN_LENGTH..=MAX_LENGTH`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}
