//! Fixed-size random samples without replacement.

use super::shuffle::{partial_shuffle, shuffle};
use crate::engine::Engine;
use crate::error::RandKitError;

/// Draws `sample_size` distinct positions from `population` and returns
/// their elements in random order.
///
/// The population is cloned, never mutated. A sample size of 0 returns an
/// empty vector without consuming the engine at all. Otherwise only the
/// partial Fisher–Yates suffix needed to randomize `sample_size` trailing
/// positions runs — O(sample_size) draws rather than O(n) — and those
/// trailing elements are returned. A sample of the whole population
/// degenerates to a full shuffle.
///
/// # Errors
/// Returns [`RandKitError::SampleSizeOutOfRange`] when `sample_size`
/// exceeds the population length.
///
/// # Examples
///
/// ```
/// use randkit::distribution::sample::sample;
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let mut engine = XorGen4096::seed(42);
/// let hand = sample(&mut engine, &[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(hand.len(), 2);
/// ```
pub fn sample<E: Engine + ?Sized, T: Clone>(
    engine: &mut E,
    population: &[T],
    sample_size: usize,
) -> Result<Vec<T>, RandKitError> {
    let length = population.len();
    if sample_size > length {
        return Err(RandKitError::SampleSizeOutOfRange);
    }
    if sample_size == 0 {
        return Ok(Vec::new());
    }

    let mut clone = population.to_vec();
    if sample_size == length {
        shuffle(engine, &mut clone);
        return Ok(clone);
    }

    let down_to = length - sample_size - 1;
    partial_shuffle(engine, &mut clone, down_to);
    Ok(clone.split_off(length - sample_size))
}
