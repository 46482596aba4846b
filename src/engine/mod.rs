//! Engine subsystem for randkit.
//!
//! Defines the [`Engine`] capability consumed by every distribution, the
//! reference [`XorGen4096`](xorgen4096::XorGen4096) generator, entropy
//! acquisition for auto-seeding, and the process-wide shared engine.

pub(crate) mod entropy;
pub mod shared;
pub mod xorgen4096;

/// Capability trait for stateful sources of raw pseudo-random integers.
///
/// An Engine produces one signed 32-bit integer per [`next`](Self::next)
/// call, advancing hidden state irreversibly with each call. Distributions
/// are generic over this capability and never over a concrete generator
/// type, so any generator can drive any distribution.
///
/// Engines are mutable, unsynchronized state machines: to generate
/// concurrently, use one engine per thread or serialize access externally.
pub trait Engine {
    /// Returns the next signed 32-bit value of the sequence, mutating the
    /// internal state.
    fn next(&mut self) -> i32;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn next(&mut self) -> i32 {
        (**self).next()
    }
}
