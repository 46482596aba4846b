//! Error types for the randkit library.

use std::fmt;

/// Errors produced by the randkit library.
///
/// All variants describe input-validation failures at distribution
/// construction or collection-operation time. Engines themselves never
/// fail: `next()` is total over the generator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandKitError {
    /// `pick` was called on an empty slice.
    EmptyPick,
    /// `pick` bounds resolve to a window outside the slice.
    PickBoundsOutOfRange,
    /// `sample` size exceeds the population length.
    SampleSizeOutOfRange,
    /// `integer` minimum is greater than its maximum.
    InvalidIntegerRange,
    /// `integer` range cardinality exceeds 2^53.
    RangeTooLarge,
    /// `real` minimum is greater than its maximum.
    InvalidRealRange,
    /// `real` received a non-finite bound.
    NonFiniteRealRange,
    /// A string distribution was created with an empty pool.
    EmptyStringPool,
    /// `date` bounds are unordered or precede the Unix epoch.
    InvalidDateRange,
}

impl fmt::Display for RandKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandKitError::EmptyPick => {
                write!(f, "Cannot pick from an empty array")
            }
            RandKitError::PickBoundsOutOfRange => {
                write!(f, "Expected begin and end to be within the array bounds")
            }
            RandKitError::SampleSizeOutOfRange => {
                write!(
                    f,
                    "Expected sampleSize to be within 0 and the length of the population"
                )
            }
            RandKitError::InvalidIntegerRange => {
                write!(f, "Expected min to be at most max")
            }
            RandKitError::RangeTooLarge => {
                write!(f, "Expected range cardinality to be at most 2^53")
            }
            RandKitError::InvalidRealRange => {
                write!(f, "Expected min to be at most max")
            }
            RandKitError::NonFiniteRealRange => {
                write!(f, "Expected min and max to be finite")
            }
            RandKitError::EmptyStringPool => {
                write!(f, "Expected pool not to be an empty string")
            }
            RandKitError::InvalidDateRange => {
                write!(f, "Expected start to be an epoch-or-later time at most end")
            }
        }
    }
}

impl std::error::Error for RandKitError {}
