//! Entropy acquisition for auto-seeding.
//!
//! Produces a short array of 32-bit seed words from wall-clock time and
//! OS-level randomness. Quality is sufficient for statistically distinct
//! engine instances, not for cryptographic keying.

use std::time::{SystemTime, UNIX_EPOCH};

/// Number of 32-bit words in an entropy array.
const ENTROPY_WORDS: usize = 16;

/// Returns an ordered sequence of seed words for the array-seeding
/// procedure.
///
/// The first word is the current time in milliseconds truncated to 32 bits;
/// the remaining words come from the operating system's randomness source.
/// When the OS source is unavailable the remaining words fall back to a
/// clock-derived truncating multiply-add sequence, keeping auto-seeding
/// usable (though weaker) on exotic targets.
pub(crate) fn create_entropy() -> Vec<i32> {
    let mut values = Vec::with_capacity(ENTROPY_WORDS);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    values.push(millis as i32);

    let mut buffer = [0u8; (ENTROPY_WORDS - 1) * 4];
    if getrandom::getrandom(&mut buffer).is_ok() {
        for chunk in buffer.chunks_exact(4) {
            values.push(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
    } else {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or(0);
        let mut word = (millis ^ nanos) as i32;
        for i in 1..ENTROPY_WORDS {
            word = word.wrapping_mul(0x6c07_8965_u32 as i32).wrapping_add(i as i32);
            values.push(word);
        }
    }

    values
}
