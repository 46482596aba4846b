//! Primitive width adapters.
//!
//! Turn one or two raw engine draws into canonical integer shapes: 32-bit
//! signed/unsigned, and 53-bit (the widest integer exactly representable
//! in an `f64`) in economical and full-entropy variants, plus unit-interval
//! reals built on them.

use crate::engine::Engine;

/// Mask selecting the low 21 bits of a draw (the 53-bit high word).
const UINT21_MASK: u32 = 0x1F_FFFF;

/// 2^53 as a float, for exclusive unit-interval scaling.
const UINT53_SIZE: f64 = 9007199254740992.0;

/// 2^53 - 1 as a float, for inclusive unit-interval scaling.
const UINT53_MAX: f64 = 9007199254740991.0;

/// Returns the raw 32-bit signed draw unchanged.
#[inline]
pub fn int32<E: Engine + ?Sized>(engine: &mut E) -> i32 {
    engine.next()
}

/// Returns the raw draw reinterpreted as unsigned, in `[0, 2^32 - 1]`.
#[inline]
pub fn uint32<E: Engine + ?Sized>(engine: &mut E) -> u32 {
    engine.next() as u32
}

/// Combines two raw draws into a uniform integer in `[0, 2^53 - 1]`.
///
/// Economical variant: the first draw supplies the 21-bit high word (its
/// upper 11 bits are discarded), the second draw supplies all 32 low bits.
#[inline]
pub fn uint53<E: Engine + ?Sized>(engine: &mut E) -> u64 {
    let high = (engine.next() as u32) & UINT21_MASK;
    let low = engine.next() as u32;
    ((high as u64) << 32) | low as u64
}

/// Combines two raw draws into a uniform integer in `[0, 2^53 - 1]`,
/// spending every bit of both draws.
///
/// The high draw is xor-folded down to 21 bits (`h ^ (h >>> 21)`), so all
/// 32 of its bits participate; the second draw supplies the full low word.
/// Each output bit is an xor over a disjoint set of independent uniform
/// bits, so the result is exactly uniform.
#[inline]
pub fn uint53_full<E: Engine + ?Sized>(engine: &mut E) -> u64 {
    let raw = engine.next() as u32;
    let high = (raw ^ (raw >> 21)) & UINT21_MASK;
    let low = engine.next() as u32;
    ((high as u64) << 32) | low as u64
}

/// Combines two raw draws into a uniform integer in `[-2^52, 2^52 - 1]`.
///
/// The 53-bit composition of [`uint53`] reinterpreted as two's complement,
/// with bit 52 as the sign.
#[inline]
pub fn int53<E: Engine + ?Sized>(engine: &mut E) -> i64 {
    sign_extend_53(uint53(engine))
}

/// Full-entropy variant of [`int53`], over the same `[-2^52, 2^52 - 1]`.
#[inline]
pub fn int53_full<E: Engine + ?Sized>(engine: &mut E) -> i64 {
    sign_extend_53(uint53_full(engine))
}

/// Returns a uniform float in `[0, 1)`.
#[inline]
pub fn real_zero_to_one_exclusive<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    uint53(engine) as f64 * (1.0 / UINT53_SIZE)
}

/// Returns a uniform float in `[0, 1]`.
#[inline]
pub fn real_zero_to_one_inclusive<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    uint53_full(engine) as f64 * (1.0 / UINT53_MAX)
}

/// Sign-extends bit 52 of a 53-bit unsigned value.
#[inline]
fn sign_extend_53(value: u64) -> i64 {
    ((value << 11) as i64) >> 11
}
