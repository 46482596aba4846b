//! randkit: composable pseudo-random number toolkit.
//!
//! A pluggable bit-stream [`Engine`] abstraction plus a layer of
//! distributions that convert raw 32-bit engine output into statistically
//! correct values: bias-free integers over arbitrary ranges, bounded reals
//! with 53-bit precision, weighted booleans, picks, shuffles, and
//! fixed-size samples. The reference engine is [`XorGen4096`], a 4096-word
//! xorshift generator with deterministic seeding, fast-forward, and usage
//! accounting.
//!
//! # Architecture
//!
//! ```text
//! Engine        (capability — one signed 32-bit draw per call)
//!     ↑ implemented by XorGen4096, GlobalEngine, or any caller type
//! distribution  (pure values: parameters fixed once, sampled many times)
//!     ↑ composed by
//! Random        (facade — an engine bundled with every distribution)
//! ```
//!
//! # Examples
//!
//! Deterministic draws from a seeded engine:
//!
//! ```
//! use randkit::distribution::{integer::integer, Distribution};
//! use randkit::engine::xorgen4096::XorGen4096;
//!
//! let die = integer(1, 6).unwrap();
//! let mut engine = XorGen4096::seed(12345);
//! let mut replay = XorGen4096::seed(12345);
//! assert_eq!(die.sample(&mut engine), die.sample(&mut replay));
//! ```
//!
//! One-off values through the facade:
//!
//! ```
//! use randkit::Random;
//!
//! let mut random = Random::new();
//! let coin = random.boolean();
//! assert!(coin || !coin);
//! ```
//!
//! Not a cryptographic library: the generator does not resist
//! state-recovery attacks.

#![deny(clippy::all)]

pub mod distribution;
pub mod engine;
pub mod error;

mod random;

pub use distribution::Distribution;
pub use engine::shared::GlobalEngine;
pub use engine::xorgen4096::XorGen4096;
pub use engine::Engine;
pub use error::RandKitError;
pub use random::Random;
