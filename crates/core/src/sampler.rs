//! Random selection of a fixed-size subset of a question pool.

use rand::Rng;

/// Shuffle `items` in place with the Fisher-Yates algorithm.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen slot in `[0, i]`, so every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick `min(count, pool.len())` distinct items from `pool` in random order.
///
/// The pool itself is left untouched; a shuffled copy is truncated instead.
#[must_use]
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut picked = pool.to_vec();
    shuffle(&mut picked, rng);
    picked.truncate(count.min(pool.len()));
    picked
}
