//! Fixed character sets the generator samples from.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four character classes a password may draw from.
///
/// Lowercase is always part of the pool; the other three are toggled by
/// [`GenerationConfig`](crate::config::GenerationConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Pool order: lowercase, uppercase, digits, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Number of characters in the class. All sets are ASCII.
    pub fn size(self) -> usize {
        self.chars().len()
    }

    /// Which class `c` belongs to, if any.
    pub fn of(c: char) -> Option<CharClass> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.chars().contains(c))
    }
}
