//! Distribution layer for randkit.
//!
//! Converts raw engine output into statistically correct typed values:
//! primitive width adapters, bias-free bounded integers and reals, weighted
//! booleans, collection operations, and string/uuid/date helpers.
//!
//! A distribution is created once from its parameters (all validation and
//! precomputation happens at that point) and can then be invoked any number
//! of times against any number of engines.

pub mod boolean;
pub mod date;
pub mod dice;
pub mod integer;
pub mod pick;
pub mod primitives;
pub mod real;
pub mod sample;
pub mod shuffle;
pub mod string;
pub mod uuid4;

use crate::engine::Engine;

/// A pure function from an engine to a typed random value.
///
/// Implementors hold only the parameters fixed at creation time; sampling
/// has no side effects beyond consuming the engine, so a distribution may
/// be stored, shared, and reused across engines (including concurrently,
/// against different engines).
pub trait Distribution {
    /// The type of value produced per draw.
    type Output;

    /// Draws one value from the distribution using the given engine.
    fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> Self::Output;
}
