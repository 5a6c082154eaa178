//! Uniform random permutation of record sequences.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `source`.
///
/// Shuffles a copy, so the source is left untouched. Each call draws fresh
/// randomness from `rng`.
pub fn shuffle_records<T: Clone>(source: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut deck = source.to_vec();
    deck.shuffle(rng);
    deck
}
