//! Uniform element picks from slices.

use super::integer::Integer;
use super::Distribution;
use crate::engine::Engine;
use crate::error::RandKitError;

/// Picks one element uniformly from `array[begin..end]` without mutating
/// the slice.
///
/// `begin` defaults to 0 and `end` to `array.len()`; either may be
/// negative, meaning "counted from the end" (`-1` is the last position).
/// The index is drawn via `integer(begin, end - 1)`.
///
/// # Errors
/// Returns [`RandKitError::EmptyPick`] for an empty slice and
/// [`RandKitError::PickBoundsOutOfRange`] when the resolved window is empty
/// or falls outside the slice.
///
/// # Examples
///
/// ```
/// use randkit::distribution::pick::pick;
/// use randkit::engine::xorgen4096::XorGen4096;
///
/// let mut engine = XorGen4096::seed(42);
/// let names = ["ada", "grace", "edsger"];
/// let chosen = pick(&mut engine, &names, None, None).unwrap();
/// assert!(names.contains(chosen));
/// ```
pub fn pick<'a, E: Engine + ?Sized, T>(
    engine: &mut E,
    array: &'a [T],
    begin: Option<isize>,
    end: Option<isize>,
) -> Result<&'a T, RandKitError> {
    let length = array.len();
    if length == 0 {
        return Err(RandKitError::EmptyPick);
    }

    let begin = resolve_bound(begin.unwrap_or(0), length);
    let end = resolve_bound(end.unwrap_or(length as isize), length);
    if begin < 0 || end > length as i64 || begin >= end {
        return Err(RandKitError::PickBoundsOutOfRange);
    }

    let index = Integer::bounded(begin, end - 1).sample(engine);
    Ok(&array[index as usize])
}

/// Resolves a possibly-negative bound against the slice length.
fn resolve_bound(bound: isize, length: usize) -> i64 {
    if bound < 0 {
        length as i64 + bound as i64
    } else {
        bound as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::xorgen4096::XorGen4096;

    #[test]
    fn test_empty_slice_is_an_error() {
        let mut engine = XorGen4096::seed(1);
        let empty: [u8; 0] = [];
        let result = pick(&mut engine, &empty, None, None);
        assert_eq!(result, Err(RandKitError::EmptyPick));
    }

    #[test]
    fn test_pick_returns_element_of_the_slice() {
        let mut engine = XorGen4096::seed(42);
        let values = [10, 20, 30, 40, 50];
        for _ in 0..100 {
            let chosen = pick(&mut engine, &values, None, None).unwrap();
            assert!(values.contains(chosen));
        }
    }

    #[test]
    fn test_bounds_restrict_the_index_window() {
        // A 1337-element slice picked with begin 13 and end -17 draws its
        // index from [13, 1319].
        let values: Vec<usize> = (0..1337).collect();
        let mut engine = XorGen4096::seed(7);
        for _ in 0..1_000 {
            let &index = pick(&mut engine, &values, Some(13), Some(-17)).unwrap();
            assert!((13..=1319).contains(&index), "index {} out of window", index);
        }
    }

    #[test]
    fn test_negative_begin_counts_from_the_end() {
        let values = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut engine = XorGen4096::seed(3);
        for _ in 0..200 {
            let &value = pick(&mut engine, &values, Some(-3), None).unwrap();
            assert!(value >= 7);
        }
    }

    #[test]
    fn test_window_outside_the_slice_is_an_error() {
        let values = [1, 2, 3];
        let mut engine = XorGen4096::seed(1);
        assert_eq!(
            pick(&mut engine, &values, Some(5), None),
            Err(RandKitError::PickBoundsOutOfRange)
        );
        assert_eq!(
            pick(&mut engine, &values, None, Some(9)),
            Err(RandKitError::PickBoundsOutOfRange)
        );
        assert_eq!(
            pick(&mut engine, &values, Some(-9), None),
            Err(RandKitError::PickBoundsOutOfRange)
        );
    }

    #[test]
    fn test_single_element_window_needs_no_draw_variability() {
        let values = ["a", "b", "c"];
        let mut engine = XorGen4096::seed(11);
        for _ in 0..10 {
            assert_eq!(*pick(&mut engine, &values, Some(1), Some(2)).unwrap(), "b");
        }
    }
}
