//! Random strings drawn from character pools.

use super::integer::Integer;
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// Default 64-character pool: letters, digits, underscore, and hyphen.
pub const DEFAULT_POOL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Lowercase and uppercase hexadecimal pools.
const HEX_LOWER: &str = "0123456789abcdef";
const HEX_UPPER: &str = "0123456789ABCDEF";

/// Distribution over strings whose characters come uniformly from a fixed
/// pool.
///
/// Unlike the scalar distributions, sampling takes the requested length:
/// the pool is the parameter fixed at creation, the length varies per call.
#[derive(Debug, Clone)]
pub struct StringPool {
    pool: Vec<char>,
    index: Integer,
}

/// Creates a string distribution over the characters of `pool`.
///
/// # Errors
/// Returns [`RandKitError::EmptyStringPool`] when `pool` is empty.
///
/// # Examples
///
/// ```
/// use randkit::distribution::string::string_pool;
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let digits = string_pool("0123456789").unwrap();
/// let mut engine = XorGen4096::seed(42);
/// let code = digits.sample(&mut engine, 6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn string_pool(pool: &str) -> Result<StringPool, RandKitError> {
    let pool: Vec<char> = pool.chars().collect();
    if pool.is_empty() {
        return Err(RandKitError::EmptyStringPool);
    }
    let index = Integer::bounded(0, pool.len() as i64 - 1);
    Ok(StringPool { pool, index })
}

/// Creates a string distribution over the default 64-character pool.
pub fn string() -> StringPool {
    StringPool {
        pool: DEFAULT_POOL.chars().collect(),
        index: Integer::bounded(0, 63),
    }
}

/// Creates a hexadecimal string distribution.
pub fn hex(upper: bool) -> StringPool {
    let pool = if upper { HEX_UPPER } else { HEX_LOWER };
    StringPool {
        pool: pool.chars().collect(),
        index: Integer::bounded(0, 15),
    }
}

impl StringPool {
    /// Draws a string of `length` characters, one uniform pool index per
    /// character.
    pub fn sample<E: Engine + ?Sized>(&self, engine: &mut E, length: usize) -> String {
        (0..length)
            .map(|_| self.pool[self.index.sample(engine) as usize])
            .collect()
    }
}
