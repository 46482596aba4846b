//! Uniform timestamps over closed time ranges.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::integer::{integer, Integer};
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// Uniform distribution over whole milliseconds in `[start, end]`.
#[derive(Debug, Clone)]
pub struct DateDistribution {
    millis: Integer,
}

/// Creates a uniform distribution over timestamps between `start` and
/// `end`, both inclusive, at millisecond resolution.
///
/// # Errors
/// Returns [`RandKitError::InvalidDateRange`] when either bound precedes
/// the Unix epoch or `start > end`.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use randkit::distribution::{date::date, Distribution};
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let start = UNIX_EPOCH + Duration::from_secs(1_000_000);
/// let end = UNIX_EPOCH + Duration::from_secs(2_000_000);
/// let dist = date(start, end).unwrap();
/// let mut engine = XorGen4096::seed(42);
/// let when = dist.sample(&mut engine);
/// assert!(when >= start && when <= end);
/// ```
pub fn date(start: SystemTime, end: SystemTime) -> Result<DateDistribution, RandKitError> {
    let start_millis = epoch_millis(start)?;
    let end_millis = epoch_millis(end)?;
    if start_millis > end_millis {
        return Err(RandKitError::InvalidDateRange);
    }
    // Epoch millisecond values stay far below 2^53, so the integer
    // distribution always accepts this range.
    let millis =
        integer(start_millis, end_millis).map_err(|_| RandKitError::InvalidDateRange)?;
    Ok(DateDistribution { millis })
}

impl Distribution for DateDistribution {
    type Output = SystemTime;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.millis.sample(engine) as u64)
    }
}

/// Milliseconds since the Unix epoch, rejecting pre-epoch instants.
fn epoch_millis(time: SystemTime) -> Result<i64, RandKitError> {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .map_err(|_| RandKitError::InvalidDateRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::xorgen4096::XorGen4096;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_unordered_bounds_are_an_error() {
        assert!(matches!(
            date(at(100), at(50)),
            Err(RandKitError::InvalidDateRange)
        ));
    }

    #[test]
    fn test_pre_epoch_bounds_are_an_error() {
        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        assert!(matches!(
            date(before_epoch, at(10)),
            Err(RandKitError::InvalidDateRange)
        ));
    }

    #[test]
    fn test_samples_stay_within_the_range() {
        let dist = date(at(1_000), at(2_000)).unwrap();
        let mut engine = XorGen4096::seed(42);
        for _ in 0..1_000 {
            let when = dist.sample(&mut engine);
            assert!(when >= at(1_000) && when <= at(2_000));
        }
    }

    #[test]
    fn test_degenerate_range_returns_the_instant() {
        let dist = date(at(500), at(500)).unwrap();
        let mut engine = XorGen4096::seed(1);
        assert_eq!(dist.sample(&mut engine), at(500));
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let dist = date(at(0), at(1_000_000)).unwrap();
        let mut a = XorGen4096::seed(5);
        let mut b = XorGen4096::seed(5);
        for _ in 0..50 {
            assert_eq!(dist.sample(&mut a), dist.sample(&mut b));
        }
    }
}
