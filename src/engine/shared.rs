//! Process-wide default engine.
//!
//! A single auto-seeded [`XorGen4096`] shared by the whole process,
//! constructed lazily on first use. Callers opt out simply by supplying
//! their own engine wherever an [`Engine`] is accepted.

use std::sync::{Mutex, OnceLock};

use super::xorgen4096::XorGen4096;
use super::Engine;

static SHARED: OnceLock<Mutex<XorGen4096>> = OnceLock::new();

/// Handle to the process-wide shared engine.
///
/// The underlying generator is auto-seeded on the first draw and lives for
/// the rest of the process. Every `next()` takes the shared lock, so the
/// handle is cheap to copy and safe to use from multiple threads, at the
/// cost of serializing draws.
///
/// # Examples
///
/// ```
/// use randkit::engine::{shared::GlobalEngine, Engine};
///
/// let mut engine = GlobalEngine;
/// let _value = engine.next();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalEngine;

impl Engine for GlobalEngine {
    fn next(&mut self) -> i32 {
        let shared = SHARED.get_or_init(|| Mutex::new(XorGen4096::auto_seed()));
        match shared.lock() {
            Ok(mut engine) => engine.next(),
            // A panic elsewhere cannot corrupt the generator state, so a
            // poisoned lock is still usable.
            Err(poisoned) => poisoned.into_inner().next(),
        }
    }
}
