//! Entropy estimate for a generation config.
//!
//! The estimate assumes a uniform draw from the configured pool:
//! bits = length * log2(pool_size). It is informational feedback for the CLI,
//! not a strength guarantee.

use crate::config::GenerationConfig;

/// Estimated strength of passwords produced by one config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    /// Characters in the alphabet
    pub pool_size: usize,
    /// Bits per character
    pub per_char: f64,
    /// Estimated total entropy in bits
    pub bits: f64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Verdict {
    pub fn from_bits(bits: f64) -> Self {
        match bits {
            b if b < 40.0 => Verdict::VeryWeak,
            b if b < 64.0 => Verdict::Weak,
            b if b < 80.0 => Verdict::Fair,
            b if b < 128.0 => Verdict::Strong,
            _ => Verdict::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::VeryWeak => "very weak",
            Verdict::Weak => "weak",
            Verdict::Fair => "fair",
            Verdict::Strong => "strong",
            Verdict::VeryStrong => "very strong",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate entropy for passwords generated with `config`.
pub fn estimate(config: &GenerationConfig) -> Strength {
    let pool_size = config.pool_size();
    let per_char = (pool_size as f64).log2();
    let bits = per_char * config.length() as f64;
    Strength {
        pool_size,
        per_char,
        bits,
        verdict: Verdict::from_bits(bits),
    }
}
