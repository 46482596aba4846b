//! Uniform floating-point values over bounded intervals.

use super::primitives::{uint53, uint53_full};
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// 2^53 as a float.
const UINT53_SIZE: f64 = 9007199254740992.0;

/// 2^53 - 1 as a float.
const UINT53_MAX: f64 = 9007199254740991.0;

/// Uniform distribution over `[min, max)` or `[min, max]`.
///
/// Create via [`real`]. The 53-bit draw is scaled into the unit interval
/// (divisor 2^53 exclusive, 2^53 - 1 inclusive) and then mapped onto the
/// requested range.
#[derive(Debug, Clone)]
pub struct Real {
    min: f64,
    length: f64,
    inclusive: bool,
}

/// Creates a uniform distribution over `[min, max)` when `inclusive` is
/// false and `[min, max]` when true.
///
/// A degenerate single-point range (`min == max`) is permitted and yields
/// `min` on every draw.
///
/// # Parameters
/// - `min`: Lower bound (inclusive).
/// - `max`: Upper bound (reachable only when `inclusive`).
/// - `inclusive`: Whether `max` itself is a possible output.
///
/// # Errors
/// Returns [`RandKitError::NonFiniteRealRange`] if either bound is NaN or
/// infinite, or [`RandKitError::InvalidRealRange`] if `min > max`.
///
/// # Examples
///
/// ```
/// use randkit::distribution::{real::real, Distribution};
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let dist = real(-2.5, 2.5, false).unwrap();
/// let mut engine = XorGen4096::seed(42);
/// let value = dist.sample(&mut engine);
/// assert!(value >= -2.5 && value < 2.5);
/// ```
pub fn real(min: f64, max: f64, inclusive: bool) -> Result<Real, RandKitError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandKitError::NonFiniteRealRange);
    }
    if min > max {
        return Err(RandKitError::InvalidRealRange);
    }
    Ok(Real {
        min,
        length: max - min,
        inclusive,
    })
}

impl Distribution for Real {
    type Output = f64;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> f64 {
        let fraction = if self.inclusive {
            uint53_full(engine) as f64 * (1.0 / UINT53_MAX)
        } else {
            uint53(engine) as f64 * (1.0 / UINT53_SIZE)
        };
        self.min + fraction * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::xorgen4096::XorGen4096;

    /// Engine that replays a fixed sequence of draws.
    struct Playback {
        values: Vec<i32>,
        cursor: usize,
    }

    impl Engine for Playback {
        fn next(&mut self) -> i32 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    #[test]
    fn test_non_finite_bounds_are_errors() {
        assert!(matches!(
            real(f64::NAN, 1.0, false),
            Err(RandKitError::NonFiniteRealRange)
        ));
        assert!(matches!(
            real(0.0, f64::INFINITY, true),
            Err(RandKitError::NonFiniteRealRange)
        ));
    }

    #[test]
    fn test_min_greater_than_max_is_an_error() {
        assert!(matches!(
            real(1.0, 0.0, false),
            Err(RandKitError::InvalidRealRange)
        ));
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let dist = real(3.25, 3.25, false).unwrap();
        let mut engine = XorGen4096::seed(1);
        assert_eq!(dist.sample(&mut engine), 3.25);
    }

    #[test]
    fn test_exclusive_outputs_stay_below_max() {
        let dist = real(-1.0, 1.0, false).unwrap();
        let mut engine = XorGen4096::seed(42);
        for _ in 0..10_000 {
            let value = dist.sample(&mut engine);
            assert!((-1.0..1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_inclusive_outputs_stay_within_closed_range() {
        let dist = real(0.0, 10.0, true).unwrap();
        let mut engine = XorGen4096::seed(42);
        for _ in 0..10_000 {
            let value = dist.sample(&mut engine);
            assert!((0.0..=10.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_inclusive_max_is_reachable() {
        // The top 53-bit value maps to exactly 1.0 under the inclusive
        // divisor.
        let dist = real(2.0, 4.0, true).unwrap();
        let mut engine = Playback {
            values: vec![0x1F_FFFF, -1],
            cursor: 0,
        };
        assert_eq!(dist.sample(&mut engine), 4.0);
    }

    #[test]
    fn test_exclusive_top_draw_stays_below_max() {
        let dist = real(2.0, 4.0, false).unwrap();
        let mut engine = Playback {
            values: vec![0x1F_FFFF, -1],
            cursor: 0,
        };
        assert!(dist.sample(&mut engine) < 4.0);
    }

    #[test]
    fn test_mean_is_near_range_center() {
        let dist = real(0.0, 1.0, false).unwrap();
        let mut engine = XorGen4096::seed(9);
        let draws = 100_000;
        let sum: f64 = (0..draws).map(|_| dist.sample(&mut engine)).sum();
        let mean = sum / draws as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {} far from 0.5", mean);
    }
}
