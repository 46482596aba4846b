//! The `Random` facade: an engine bundled with the distribution layer.
//!
//! Convenience surface for callers who want values rather than reusable
//! distribution objects. Each method builds the matching distribution,
//! draws once from the owned engine, and returns the value. Hot paths that
//! draw from one distribution many times should create the distribution
//! directly and reuse it; the facade re-validates parameters per call.

use std::time::SystemTime;

use crate::distribution::boolean::{boolean, boolean_with_probability, boolean_with_ratio};
use crate::distribution::date::date;
use crate::distribution::dice::{dice, die};
use crate::distribution::integer::integer;
use crate::distribution::pick::pick;
use crate::distribution::primitives;
use crate::distribution::real::real;
use crate::distribution::sample::sample;
use crate::distribution::shuffle::shuffle;
use crate::distribution::string::{hex, string, string_pool};
use crate::distribution::uuid4::uuid4;
use crate::distribution::Distribution;
use crate::engine::shared::GlobalEngine;
use crate::engine::Engine;
use crate::error::RandKitError;

/// Random value generator bound to an engine.
///
/// With no type parameter, draws route through the process-wide shared
/// engine; supply a concrete engine for deterministic, isolated streams.
///
/// # Examples
///
/// ```
/// use randkit::engine::xorgen4096::XorGen4096;
/// use randkit::Random;
///
/// let mut random = Random::with_engine(XorGen4096::seed(42));
/// let roll = random.die(6).unwrap();
/// assert!((1..=6).contains(&roll));
/// ```
pub struct Random<E: Engine = GlobalEngine> {
    engine: E,
}

impl Random<GlobalEngine> {
    /// Creates a generator backed by the process-wide shared engine.
    pub fn new() -> Self {
        Random {
            engine: GlobalEngine,
        }
    }
}

impl Default for Random<GlobalEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Random<E> {
    /// Creates a generator backed by the given engine.
    pub fn with_engine(engine: E) -> Self {
        Random { engine }
    }

    /// Consumes the generator and returns its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Returns a uniform integer in `[min, max]` inclusive.
    pub fn integer(&mut self, min: i64, max: i64) -> Result<i64, RandKitError> {
        Ok(integer(min, max)?.sample(&mut self.engine))
    }

    /// Returns a uniform float in `[min, max)`, or `[min, max]` when
    /// `inclusive` is set.
    pub fn real(&mut self, min: f64, max: f64, inclusive: bool) -> Result<f64, RandKitError> {
        Ok(real(min, max, inclusive)?.sample(&mut self.engine))
    }

    /// Returns a fair coin flip.
    pub fn boolean(&mut self) -> bool {
        boolean().sample(&mut self.engine)
    }

    /// Returns `true` with probability `p`.
    pub fn boolean_with_probability(&mut self, p: f64) -> bool {
        boolean_with_probability(p).sample(&mut self.engine)
    }

    /// Returns `true` with probability `numerator / denominator`.
    pub fn boolean_with_ratio(
        &mut self,
        numerator: i64,
        denominator: i64,
    ) -> Result<bool, RandKitError> {
        Ok(boolean_with_ratio(numerator, denominator)?.sample(&mut self.engine))
    }

    /// Picks one element uniformly from `array[begin..end]`.
    pub fn pick<'a, T>(
        &mut self,
        array: &'a [T],
        begin: Option<isize>,
        end: Option<isize>,
    ) -> Result<&'a T, RandKitError> {
        pick(&mut self.engine, array, begin, end)
    }

    /// Shuffles the slice in place, unbiased.
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        shuffle(&mut self.engine, array);
    }

    /// Returns `sample_size` elements drawn without replacement.
    pub fn sample<T: Clone>(
        &mut self,
        population: &[T],
        sample_size: usize,
    ) -> Result<Vec<T>, RandKitError> {
        sample(&mut self.engine, population, sample_size)
    }

    /// Rolls one die with `side_count` sides.
    pub fn die(&mut self, side_count: i64) -> Result<i64, RandKitError> {
        Ok(die(side_count)?.sample(&mut self.engine))
    }

    /// Rolls `die_count` dice with `side_count` sides.
    pub fn dice(&mut self, side_count: i64, die_count: usize) -> Result<Vec<i64>, RandKitError> {
        Ok(dice(side_count, die_count)?.sample(&mut self.engine))
    }

    /// Returns a version-4 UUID string.
    pub fn uuid4(&mut self) -> String {
        uuid4(&mut self.engine)
    }

    /// Returns a random string of `length` characters from the default
    /// 64-character pool.
    pub fn string(&mut self, length: usize) -> String {
        string().sample(&mut self.engine, length)
    }

    /// Returns a random string of `length` characters from `pool`.
    pub fn string_from_pool(&mut self, length: usize, pool: &str) -> Result<String, RandKitError> {
        Ok(string_pool(pool)?.sample(&mut self.engine, length))
    }

    /// Returns a random hexadecimal string of `length` digits.
    pub fn hex(&mut self, length: usize, upper: bool) -> String {
        hex(upper).sample(&mut self.engine, length)
    }

    /// Returns a uniform timestamp in `[start, end]` at millisecond
    /// resolution.
    pub fn date(&mut self, start: SystemTime, end: SystemTime) -> Result<SystemTime, RandKitError> {
        Ok(date(start, end)?.sample(&mut self.engine))
    }

    /// Raw signed 32-bit draw.
    pub fn int32(&mut self) -> i32 {
        primitives::int32(&mut self.engine)
    }

    /// Raw draw reinterpreted as unsigned 32-bit.
    pub fn uint32(&mut self) -> u32 {
        primitives::uint32(&mut self.engine)
    }

    /// Uniform integer in `[0, 2^53 - 1]`, economical composition.
    pub fn uint53(&mut self) -> u64 {
        primitives::uint53(&mut self.engine)
    }

    /// Uniform integer in `[0, 2^53 - 1]`, full-entropy composition.
    pub fn uint53_full(&mut self) -> u64 {
        primitives::uint53_full(&mut self.engine)
    }

    /// Uniform integer in `[-2^52, 2^52 - 1]`, economical composition.
    pub fn int53(&mut self) -> i64 {
        primitives::int53(&mut self.engine)
    }

    /// Uniform integer in `[-2^52, 2^52 - 1]`, full-entropy composition.
    pub fn int53_full(&mut self) -> i64 {
        primitives::int53_full(&mut self.engine)
    }

    /// Uniform float in `[0, 1)`.
    pub fn real_zero_to_one_exclusive(&mut self) -> f64 {
        primitives::real_zero_to_one_exclusive(&mut self.engine)
    }

    /// Uniform float in `[0, 1]`.
    pub fn real_zero_to_one_inclusive(&mut self) -> f64 {
        primitives::real_zero_to_one_inclusive(&mut self.engine)
    }
}
