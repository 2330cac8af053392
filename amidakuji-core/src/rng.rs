//! Seed resolution.
//!
//! Every ladder is generated from a single `u64` seed so a printed sheet can
//! be regenerated exactly. The seed is either given, derived from a phrase
//! via BLAKE3, or drawn from OS entropy and then reported.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where a run's seed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Fixed(u64),
    Phrase(String),
    Entropy,
}

impl SeedSource {
    /// Resolve to a concrete seed. Only `Entropy` is nondeterministic.
    pub fn resolve(&self) -> u64 {
        match self {
            Self::Fixed(seed) => *seed,
            Self::Phrase(phrase) => phrase_seed(phrase),
            Self::Entropy => rand::thread_rng().gen(),
        }
    }
}

/// Derive a seed from free text. The same phrase always yields the same seed.
pub fn phrase_seed(phrase: &str) -> u64 {
    let hash = blake3::hash(phrase.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Seeded generator used for ladder generation.
pub fn ladder_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
