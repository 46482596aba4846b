//! Weighted and unweighted boolean distributions.
//!
//! Three construction shapes: a fair coin from the least significant bit of
//! one raw draw, a probability in `[0, 1]` compared against a precomputed
//! fixed-point threshold, and an integer ratio resolved through the
//! bias-free [`integer`](super::integer) distribution. Degenerate
//! parameters short-circuit to constants rather than erroring.

use super::integer::{integer, Integer};
use super::primitives::{int32, uint53};
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// 2^32 as a float.
const UINT32_SIZE: f64 = 4294967296.0;

/// 2^53 as a float.
const UINT53_SIZE: f64 = 9007199254740992.0;

/// Boolean distribution with a strategy fixed at construction.
#[derive(Debug, Clone)]
pub struct Boolean {
    strategy: Strategy,
}

#[derive(Debug, Clone)]
enum Strategy {
    /// Fair coin: least significant bit of one draw.
    LeastBit,
    /// Constant result, no draws.
    Always(bool),
    /// Probability expressible in 32 bits: signed draw strictly below the
    /// threshold `ceil(p * 2^32) - 2^31`.
    Threshold32(i32),
    /// Probability needing more than 32 bits: 53-bit draw strictly below
    /// `ceil(p * 2^53)`.
    Threshold53(u64),
    /// Integer ratio: true iff `numerator > integer(0, denominator-1)`.
    Ratio { numerator: i64, index: Integer },
}

/// Creates a fair-coin distribution.
///
/// The result is `true` iff the least significant bit of the raw draw is 1.
pub fn boolean() -> Boolean {
    Boolean {
        strategy: Strategy::LeastBit,
    }
}

/// Creates a weighted distribution that is `true` with probability `p`.
///
/// `p <= 0` (including NaN) always yields `false`; `p >= 1` always yields
/// `true`. Otherwise the probability is converted once into a fixed-point
/// threshold: 32 bits of randomness when `p * 2^32` is integral, 53 bits
/// otherwise.
pub fn boolean_with_probability(p: f64) -> Boolean {
    // NaN routes to the constant-false arm.
    let strategy = if p.is_nan() || p <= 0.0 {
        Strategy::Always(false)
    } else if p >= 1.0 {
        Strategy::Always(true)
    } else {
        let scaled = p * UINT32_SIZE;
        if scaled.fract() == 0.0 {
            Strategy::Threshold32((scaled as i64 - (1i64 << 31)) as i32)
        } else {
            Strategy::Threshold53((p * UINT53_SIZE).ceil() as u64)
        }
    };
    Boolean { strategy }
}

/// Creates a weighted distribution that is `true` with probability
/// `numerator / denominator`.
///
/// `numerator <= 0` always yields `false`; `numerator >= denominator`
/// always yields `true`. Otherwise one comparator value is drawn uniformly
/// from `[0, denominator - 1]` per sample and the result is `true` iff
/// `numerator > comparator`.
///
/// # Errors
/// Returns [`RandKitError::RangeTooLarge`] when the comparator range has
/// more than 2^53 values (`denominator > 2^53`). Degenerate parameters
/// short-circuit to constants before the range is built, so they never
/// error.
pub fn boolean_with_ratio(numerator: i64, denominator: i64) -> Result<Boolean, RandKitError> {
    let strategy = if numerator <= 0 {
        Strategy::Always(false)
    } else if numerator >= denominator {
        Strategy::Always(true)
    } else {
        // Reaching here requires 0 < numerator < denominator; the comparator
        // range still has to fit the 53-bit draw space.
        Strategy::Ratio {
            numerator,
            index: integer(0, denominator - 1)?,
        }
    };
    Ok(Boolean { strategy })
}

impl Boolean {
    /// True when the distribution produces a constant without drawing.
    ///
    /// Exposed so callers can detect short-circuit parameterizations.
    pub fn is_constant(&self) -> bool {
        matches!(self.strategy, Strategy::Always(_))
    }
}

impl Distribution for Boolean {
    type Output = bool;

    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> bool {
        match &self.strategy {
            Strategy::LeastBit => engine.next() & 1 == 1,
            Strategy::Always(value) => *value,
            Strategy::Threshold32(threshold) => int32(engine) < *threshold,
            Strategy::Threshold53(threshold) => uint53(engine) < *threshold,
            Strategy::Ratio { numerator, index } => *numerator > index.sample(engine),
        }
    }
}
