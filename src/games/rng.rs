//! Randomness source for round content.
//!
//! All generators take `&mut impl Rng`, so tests hand them a seeded
//! generator while the server shares one behind a lock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type GameRng = StdRng;

/// Seeded when `seed` is given, otherwise from OS entropy.
pub fn create_rng(seed: Option<u64>) -> GameRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Independent generator seeded from `shared`. Lets a caller drop the shared
/// lock before doing slower work with its own stream.
pub fn fork_rng(shared: &mut GameRng) -> GameRng {
    StdRng::seed_from_u64(shared.gen())
}
