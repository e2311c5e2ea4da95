use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The largest integer magnitude an `f64` represents exactly.
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Widens an integer to a float, failing instead of rounding.
///
/// ```
/// use matlang::util::num::i64_to_f64_checked;
///
/// assert_eq!(i64_to_f64_checked(3, ()), Ok(3.0));
/// assert_eq!(i64_to_f64_checked(i64::MAX, ()), Err(()));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a non-negative integer to a `usize`, building the error lazily.
pub fn i64_to_usize_checked<E>(value: i64, error: impl FnOnce() -> E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error())
}

/// Resolves a zero-based index against an axis of length `size`.
///
/// ```
/// use matlang::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 0, 3, 1).unwrap(), 2);
/// assert!(checked_index(3, 0, 3, 1).is_err());
/// assert!(checked_index(-1, 0, 3, 1).is_err());
/// ```
pub fn checked_index(index: i64, axis: usize, size: usize, line: usize) -> EvalResult<usize> {
    let out_of_bounds = || RuntimeError::IndexOutOfBounds { axis,
                                                            index,
                                                            size,
                                                            line };
    let position = i64_to_usize_checked(index, out_of_bounds)?;
    if position >= size {
        return Err(out_of_bounds());
    }
    Ok(position)
}
