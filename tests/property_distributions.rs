//! Property tests for the distribution layer.
//!
//! Verifies the structural invariants that must hold for arbitrary valid
//! inputs: bounds containment for integers and reals, multiset
//! preservation for shuffle and sample, and validation of sample sizes.

use proptest::prelude::*;

use randkit::distribution::integer::integer;
use randkit::distribution::real::real;
use randkit::distribution::sample::sample;
use randkit::distribution::shuffle::shuffle;
use randkit::{Distribution, XorGen4096};

proptest! {
    #[test]
    fn integer_outputs_stay_within_any_valid_range(
        seed in any::<i32>(),
        min in -1_000_000i64..1_000_000,
        span in 0i64..1_000_000,
    ) {
        let max = min + span;
        let dist = integer(min, max).unwrap();
        let mut engine = XorGen4096::seed(seed);
        for _ in 0..50 {
            let value = dist.sample(&mut engine);
            prop_assert!((min..=max).contains(&value));
        }
    }

    #[test]
    fn integer_wide_ranges_stay_within_bounds(
        seed in any::<i32>(),
        min in -(1i64 << 50)..(1i64 << 50),
        span in (1i64 << 33)..(1i64 << 40),
    ) {
        let max = min + span;
        let dist = integer(min, max).unwrap();
        let mut engine = XorGen4096::seed(seed);
        for _ in 0..20 {
            let value = dist.sample(&mut engine);
            prop_assert!((min..=max).contains(&value));
        }
    }

    #[test]
    fn real_outputs_respect_inclusivity(
        seed in any::<i32>(),
        min in -1_000.0f64..1_000.0,
        length in 0.0f64..1_000.0,
        inclusive in any::<bool>(),
    ) {
        let max = min + length;
        let dist = real(min, max, inclusive).unwrap();
        let mut engine = XorGen4096::seed(seed);
        for _ in 0..50 {
            let value = dist.sample(&mut engine);
            prop_assert!(value >= min);
            if inclusive || length == 0.0 {
                prop_assert!(value <= max);
            } else {
                prop_assert!(value < max);
            }
        }
    }

    #[test]
    fn shuffle_preserves_the_multiset(
        seed in any::<i32>(),
        mut values in proptest::collection::vec(any::<i16>(), 0..64),
    ) {
        let original = values.clone();
        let mut engine = XorGen4096::seed(seed);
        shuffle(&mut engine, &mut values);

        let mut left = values;
        let mut right = original;
        left.sort_unstable();
        right.sort_unstable();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sample_draws_a_sub_multiset_of_the_requested_size(
        seed in any::<i32>(),
        population in proptest::collection::vec(any::<i16>(), 0..64),
        size_fraction in 0.0f64..=1.0,
    ) {
        let size = (population.len() as f64 * size_fraction) as usize;
        let mut engine = XorGen4096::seed(seed);
        let chosen = sample(&mut engine, &population, size).unwrap();
        prop_assert_eq!(chosen.len(), size);

        // Every sampled element consumes one population occurrence.
        let mut pool = population;
        for value in &chosen {
            let position = pool.iter().position(|candidate| candidate == value);
            prop_assert!(position.is_some());
            pool.swap_remove(position.unwrap());
        }
    }

    #[test]
    fn sample_rejects_oversized_requests(
        seed in any::<i32>(),
        population in proptest::collection::vec(any::<i16>(), 0..16),
        excess in 1usize..10,
    ) {
        let mut engine = XorGen4096::seed(seed);
        let result = sample(&mut engine, &population, population.len() + excess);
        prop_assert!(result.is_err());
    }
}
