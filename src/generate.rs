//! Password generation.
//!
//! [`generate`] is a pure function of its [`GenerationConfig`]: it builds the
//! alphabet implied by the flags and draws `length` characters from it,
//! uniformly and with replacement. [`generate_with`] does the same with a
//! caller-supplied RNG so tests and benches can seed it.
//!
//! The thread-local generator from `rand` is used by default. Callers that
//! need a specific source should pass it through `generate_with`; this module
//! makes no claim about the strength of the output beyond the uniform draw.

use rand::distributions::Uniform;
use rand::{Rng, thread_rng};

use crate::config::GenerationConfig;

/// Generate one password for `config`.
pub fn generate(config: &GenerationConfig) -> String {
    generate_with(config, &mut thread_rng())
}

/// Generate one password for `config` using `rng`.
pub fn generate_with<R: Rng>(config: &GenerationConfig, rng: &mut R) -> String {
    let pool: Vec<char> = config.alphabet().chars().collect();
    let dist = Uniform::from(0..pool.len());
    (0..config.length()).map(|_| pool[rng.sample(dist)]).collect()
}

/// Generate `count` independent passwords for `config`.
pub fn generate_many(config: &GenerationConfig, count: usize) -> Vec<String> {
    let mut rng = thread_rng();
    (0..count).map(|_| generate_with(config, &mut rng)).collect()
}
