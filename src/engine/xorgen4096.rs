//! XorGen4096: xorshift PRNG with a 4096-word state array.
//!
//! A deterministic, seedable bit-stream generator in the xorgens family.
//! Each step mixes a state word with its successor, so the next value of
//! every word is coupled to the word after it across the full 4096-word
//! period. Seeding uses the canonical truncating multiply-add recurrences
//! (single-value and array forms), so a fixed seed reproduces the reference
//! sequence exactly.
//!
//! Not cryptographically secure: the state is recoverable from output.

use super::entropy::create_entropy;
use super::Engine;

/// Number of 32-bit words in the state array.
const ARRAY_SIZE: usize = 4096;

/// Mask for circular indexing into the state array.
const ARRAY_MASK: usize = ARRAY_SIZE - 1;

/// Fixed base seed for the array-seeding procedure.
const ARRAY_SEED: i32 = 19650218;

/// Multiplier for the single-value seeding recurrence.
const SEED_MULTIPLIER: i32 = 0x6c07_8965_u32 as i32;

/// Multipliers for the two array-folding passes.
const FOLD_MULTIPLIER_A: i32 = 1664525;
const FOLD_MULTIPLIER_B: i32 = 1566083941;

/// Pseudo-random engine backed by a 4096-word xorshift state array.
///
/// State consists of the word array, a circular cursor (`index`, always in
/// `[0, 4096)`) naming the next word to mutate, and a monotonically
/// increasing usage counter. Construct via [`seed`](Self::seed),
/// [`seed_with_array`](Self::seed_with_array), or
/// [`auto_seed`](Self::auto_seed).
pub struct XorGen4096 {
    data: [i32; ARRAY_SIZE],
    index: usize,
    uses: u64,
}

impl XorGen4096 {
    /// Returns an engine seeded with a single 32-bit value.
    ///
    /// Two engines seeded with the same value produce identical output
    /// sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use randkit::engine::{Engine, xorgen4096::XorGen4096};
    ///
    /// let mut a = XorGen4096::seed(12345);
    /// let mut b = XorGen4096::seed(12345);
    /// assert_eq!(a.next(), b.next());
    /// ```
    pub fn seed(initial: i32) -> Self {
        let mut engine = XorGen4096 {
            data: [0; ARRAY_SIZE],
            index: 0,
            uses: 0,
        };
        engine.reseed(initial);
        engine
    }

    /// Returns an engine seeded with zero or more 32-bit values.
    ///
    /// Seeds from the fixed constant `19650218`, then folds the source
    /// values and their positions into the state across two mixing passes,
    /// wrapping the write cursor through the whole array.
    pub fn seed_with_array(source: &[i32]) -> Self {
        let mut engine = Self::seed(ARRAY_SEED);

        let length = source.len();
        let mut i = 1usize;
        let mut j = 0usize;

        let mut k = ARRAY_SIZE.max(length);
        while k > 0 {
            let prev = engine.data[i - 1];
            let mixed = engine.data[i] ^ (prev ^ logical_shr(prev, 30)).wrapping_mul(FOLD_MULTIPLIER_A);
            // An empty source zeroes the word outright on this pass, per
            // the reference sequence.
            engine.data[i] = if length == 0 {
                0
            } else {
                mixed.wrapping_add(source[j]).wrapping_add(j as i32)
            };
            i += 1;
            j += 1;
            if i >= ARRAY_SIZE {
                engine.data[0] = engine.data[ARRAY_SIZE - 1];
                i = 1;
            }
            if j >= length {
                j = 0;
            }
            k -= 1;
        }

        let mut k = ARRAY_SIZE - 1;
        while k > 0 {
            let prev = engine.data[i - 1];
            let mixed = engine.data[i] ^ (prev ^ logical_shr(prev, 30)).wrapping_mul(FOLD_MULTIPLIER_B);
            engine.data[i] = mixed.wrapping_sub(i as i32);
            i += 1;
            if i >= ARRAY_SIZE {
                engine.data[0] = engine.data[ARRAY_SIZE - 1];
                i = 1;
            }
            k -= 1;
        }

        engine.index = 0;
        engine.uses = 0;
        engine
    }

    /// Returns an engine seeded from an external entropy source (wall-clock
    /// time plus OS randomness).
    ///
    /// Non-deterministic by design: two auto-seeded engines almost never
    /// produce the same first output.
    pub fn auto_seed() -> Self {
        Self::seed_with_array(&create_entropy())
    }

    /// Fast-forwards the engine by `count` positions without replaying the
    /// per-word mutation each skipped `next()` would have performed.
    ///
    /// Output after a discard matches `count` real `next()` calls as long as
    /// the skipped span stays within a single pass over the array. A discard
    /// that wraps past a word a later read depends on can diverge from the
    /// replayed sequence; this behavior is kept for compatibility with the
    /// reference implementation.
    pub fn discard(&mut self, count: u64) {
        if count == 0 {
            return;
        }
        self.uses += count;
        self.index = (self.index + count as usize) & ARRAY_MASK;
    }

    /// Returns the number of values the engine has produced or discarded.
    pub fn use_count(&self) -> u64 {
        self.uses
    }

    /// Re-initializes the state array from a single seed value.
    ///
    /// Word 0 takes the seed; each subsequent word derives from its
    /// predecessor via a 32-bit truncating multiply-add recurrence. Cursor
    /// and usage counter reset to 0.
    fn reseed(&mut self, initial: i32) {
        let mut prev = initial;
        self.data[0] = prev;
        for i in 1..ARRAY_SIZE {
            prev = (prev ^ logical_shr(prev, 30))
                .wrapping_mul(SEED_MULTIPLIER)
                .wrapping_add(i as i32);
            self.data[i] = prev;
        }
        self.index = 0;
        self.uses = 0;
    }
}

impl Engine for XorGen4096 {
    /// Returns the next int32 of the sequence.
    ///
    /// Mutates the word at the cursor by xorshifting it against its
    /// successor, then advances the cursor circularly.
    fn next(&mut self) -> i32 {
        let i = self.index;
        self.index = (i + 1) & ARRAY_MASK;

        let mut t = self.data[i];
        let s = self.data[self.index];

        t ^= t << 13;
        t ^= logical_shr(t, 17);
        t ^= s ^ logical_shr(s, 5);

        self.data[i] = t;
        self.uses += 1;
        t
    }
}

/// Logical (zero-filling) right shift on a signed 32-bit word.
#[inline]
fn logical_shr(value: i32, shift: u32) -> i32 {
    ((value as u32) >> shift) as i32
}
