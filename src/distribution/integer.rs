//! Uniform integers over arbitrary closed ranges.
//!
//! `integer(min, max)` validates once and precomputes a sampling strategy:
//! a degenerate constant, a direct full-width draw, a power-of-two mask, or
//! rejection sampling against the largest multiple of the range cardinality
//! that fits the 32- or 53-bit output space. Rejection keeps the result
//! provably free of modulo bias; the rejection probability is always below
//! 50%, so the expected number of draws per value is below 2.

use super::primitives::{uint32, uint53};
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// 2^32 as an unsigned 64-bit value.
const UINT32_SIZE: u64 = 1 << 32;

/// 2^53 as an unsigned 64-bit value.
const UINT53_SIZE: u64 = 1 << 53;

/// Uniform distribution over a closed integer interval `[min, max]`.
///
/// Create via [`integer`]. Sampling is cheap and infallible; all range
/// validation happens at construction.
#[derive(Debug, Clone)]
pub struct Integer {
    min: i64,
    strategy: Strategy,
}

/// Sampling strategy, fixed at construction.
#[derive(Debug, Clone)]
enum Strategy {
    /// Cardinality 1: no draw needed.
    Constant,
    /// Cardinality 2^32: one full unsigned draw.
    FullUint32,
    /// Power-of-two cardinality within 32 bits: mask one draw.
    Masked32(u32),
    /// General 32-bit case: rejection against the largest multiple of
    /// `range` not exceeding 2^32.
    Rejection32 { range: u64, limit: u64 },
    /// Cardinality 2^53: one full 53-bit composition.
    FullUint53,
    /// Power-of-two cardinality beyond 32 bits: mask a 53-bit draw.
    Masked53(u64),
    /// General 53-bit case: rejection against the largest multiple of
    /// `range` not exceeding 2^53.
    Rejection53 { range: u64, limit: u64 },
}

/// Creates a uniform distribution over `[min, max]` inclusive.
///
/// # Parameters
/// - `min`: Lower bound (inclusive).
/// - `max`: Upper bound (inclusive).
///
/// # Errors
/// Returns [`RandKitError::InvalidIntegerRange`] if `min > max`, or
/// [`RandKitError::RangeTooLarge`] if the cardinality `max - min + 1`
/// exceeds 2^53 (more entropy than one 53-bit composition provides).
///
/// # Examples
///
/// ```
/// use randkit::distribution::{integer::integer, Distribution};
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let die = integer(1, 6).unwrap();
/// let mut engine = XorGen4096::seed(42);
/// let roll = die.sample(&mut engine);
/// assert!((1..=6).contains(&roll));
/// ```
pub fn integer(min: i64, max: i64) -> Result<Integer, RandKitError> {
    if min > max {
        return Err(RandKitError::InvalidIntegerRange);
    }
    // Unsigned difference is exact even when the signed subtraction would
    // overflow (e.g. min < 0 < max).
    let span = max.wrapping_sub(min) as u64;
    if span >= UINT53_SIZE {
        return Err(RandKitError::RangeTooLarge);
    }
    Ok(Integer::with_cardinality(min, span + 1))
}

impl Integer {
    /// Builds the distribution for a pre-validated cardinality in
    /// `[1, 2^53]`.
    fn with_cardinality(min: i64, range: u64) -> Self {
        let strategy = if range == 1 {
            Strategy::Constant
        } else if range < UINT32_SIZE {
            if range.is_power_of_two() {
                Strategy::Masked32(range as u32 - 1)
            } else {
                let limit = UINT32_SIZE - UINT32_SIZE % range;
                Strategy::Rejection32 { range, limit }
            }
        } else if range == UINT32_SIZE {
            Strategy::FullUint32
        } else if range == UINT53_SIZE {
            Strategy::FullUint53
        } else if range.is_power_of_two() {
            Strategy::Masked53(range - 1)
        } else {
            let limit = UINT53_SIZE - UINT53_SIZE % range;
            Strategy::Rejection53 { range, limit }
        };
        Integer { min, strategy }
    }

    /// Crate-internal constructor for ranges known to be valid (collection
    /// indices, ratio denominators). Bounds must satisfy
    /// `0 <= min <= max < 2^53`.
    pub(crate) fn bounded(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Integer::with_cardinality(min, max.wrapping_sub(min) as u64 + 1)
    }

    /// Lower bound of the interval.
    pub fn min(&self) -> i64 {
        self.min
    }
}

impl Distribution for Integer {
    type Output = i64;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> i64 {
        let offset = match self.strategy {
            Strategy::Constant => 0,
            Strategy::FullUint32 => uint32(engine) as u64,
            Strategy::Masked32(mask) => (uint32(engine) & mask) as u64,
            Strategy::Rejection32 { range, limit } => loop {
                let raw = uint32(engine) as u64;
                if raw < limit {
                    break raw % range;
                }
            },
            Strategy::FullUint53 => uint53(engine),
            Strategy::Masked53(mask) => uint53(engine) & mask,
            Strategy::Rejection53 { range, limit } => loop {
                let raw = uint53(engine);
                if raw < limit {
                    break raw % range;
                }
            },
        };
        // min + offset <= max by construction, so this cannot overflow.
        self.min + offset as i64
    }
}
