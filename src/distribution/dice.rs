//! Die and dice-pool distributions.

use super::integer::{integer, Integer};
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// Uniform distribution over the faces of one die, `[1, side_count]`.
#[derive(Debug, Clone)]
pub struct Die {
    faces: Integer,
}

/// Creates a distribution over one roll of a `side_count`-sided die.
///
/// # Errors
/// Returns [`RandKitError::InvalidIntegerRange`] when `side_count < 1`.
pub fn die(side_count: i64) -> Result<Die, RandKitError> {
    Ok(Die {
        faces: integer(1, side_count)?,
    })
}

impl Distribution for Die {
    type Output = i64;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> i64 {
        self.faces.sample(engine)
    }
}

/// Distribution over a pool of identical dice rolled together.
#[derive(Debug, Clone)]
pub struct Dice {
    die: Die,
    die_count: usize,
}

/// Creates a distribution rolling `die_count` dice of `side_count` sides
/// per sample.
///
/// # Errors
/// Returns [`RandKitError::InvalidIntegerRange`] when `side_count < 1`.
pub fn dice(side_count: i64, die_count: usize) -> Result<Dice, RandKitError> {
    Ok(Dice {
        die: die(side_count)?,
        die_count,
    })
}

impl Distribution for Dice {
    type Output = Vec<i64>;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> Vec<i64> {
        (0..self.die_count).map(|_| self.die.sample(engine)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::xorgen4096::XorGen4096;

    #[test]
    fn test_die_with_no_sides_is_an_error() {
        assert!(matches!(die(0), Err(RandKitError::InvalidIntegerRange)));
    }

    #[test]
    fn test_die_rolls_stay_on_the_faces() {
        let d20 = die(20).unwrap();
        let mut engine = XorGen4096::seed(42);
        for _ in 0..1_000 {
            let roll = d20.sample(&mut engine);
            assert!((1..=20).contains(&roll), "rolled {}", roll);
        }
    }

    #[test]
    fn test_dice_pool_size_and_bounds() {
        let pool = dice(6, 4).unwrap();
        let mut engine = XorGen4096::seed(7);
        for _ in 0..200 {
            let rolls = pool.sample(&mut engine);
            assert_eq!(rolls.len(), 4);
            assert!(rolls.iter().all(|roll| (1..=6).contains(roll)));
        }
    }

    #[test]
    fn test_empty_pool_rolls_nothing() {
        let pool = dice(6, 0).unwrap();
        let mut engine = XorGen4096::seed(1);
        assert!(pool.sample(&mut engine).is_empty());
    }
}
