//! Fisher–Yates shuffles, full and partial.

use super::integer::Integer;
use super::Distribution;
use crate::engine::Engine;

/// Shuffles the slice in place with an unbiased Fisher–Yates permutation.
///
/// Every permutation of the slice is equally likely. Uses `len - 1` engine
/// draws (none for slices shorter than two elements).
///
/// # Examples
///
/// ```
/// use randkit::distribution::shuffle::shuffle;
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let mut engine = XorGen4096::seed(42);
/// let mut cards = [1, 2, 3, 4, 5];
/// shuffle(&mut engine, &mut cards);
/// ```
pub fn shuffle<E: Engine + ?Sized, T>(engine: &mut E, array: &mut [T]) {
    partial_shuffle(engine, array, 0);
}

/// Runs only the suffix of a Fisher–Yates shuffle.
///
/// For `i` from `array.len() - 1` down to `down_to + 1`, draws `j`
/// uniformly from `[0, i]` and swaps positions `i` and `j`. With
/// `down_to == 0` this is the full unbiased shuffle; larger values
/// randomize only the trailing positions, leaving `[0, down_to]` in place
/// except as swap targets from above. This is the O(sample-size) engine
/// behind [`sample`](super::sample::sample).
pub fn partial_shuffle<E: Engine + ?Sized, T>(engine: &mut E, array: &mut [T], down_to: usize) {
    if array.len() < 2 {
        return;
    }
    let mut i = array.len() - 1;
    while i > down_to {
        let j = Integer::bounded(0, i as i64).sample(engine) as usize;
        array.swap(i, j);
        i -= 1;
    }
}
