//! Amidakuji Core — ladder model, rung generation, and path tracing.
//!
//! This crate contains the combinatorial heart of the ladder lottery:
//! - Ladder and row types with the no-shared-line invariant
//! - Randomized generator driven by a caller-supplied RNG
//! - Path tracer producing the induced permutation
//! - Seed resolution and ladder fingerprints for reproducible sheets
//! - Top/bottom label helpers

pub mod error;
pub mod fingerprint;
pub mod generator;
pub mod labels;
pub mod ladder;
pub mod rng;
pub mod tracer;

pub use error::LadderError;
pub use fingerprint::LadderId;
pub use generator::{generate, GeneratorParams, DEFAULT_RUNG_PROBABILITY};
pub use ladder::{Ladder, Row, Rung};
pub use rng::{ladder_rng, phrase_seed, SeedSource};
pub use tracer::{trace, trace_line, Permutation};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public data types are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Ladder>();
        require_sync::<Ladder>();
        require_send::<Row>();
        require_sync::<Row>();
        require_send::<Permutation>();
        require_sync::<Permutation>();
        require_send::<LadderError>();
        require_sync::<LadderError>();
        require_send::<LadderId>();
        require_sync::<LadderId>();
        require_send::<GeneratorParams>();
        require_sync::<GeneratorParams>();
    }

    #[test]
    fn generate_then_trace() {
        let mut rng = ladder_rng(11);
        let ladder = generate(&GeneratorParams::new(5, 3, 10), &mut rng).unwrap();
        let perm = trace(&ladder).unwrap();
        assert_eq!(perm.len(), 5);
        assert!(perm.is_bijection());
    }
}
