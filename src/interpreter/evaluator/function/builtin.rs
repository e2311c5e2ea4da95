use std::iter;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::i64_to_usize_checked,
};

/// A validated size argument, keeping what the program asked for so that
/// errors can quote it.
struct Size<'a> {
    function:  &'a str,
    requested: i64,
    n:         usize,
    line:      usize,
}

impl<'a> Size<'a> {
    /// Reads the size argument, which must be a non-negative integer.
    fn read(function: &'a str, args: &[Value], line: usize) -> EvalResult<Self> {
        let requested = args.first()
                            .ok_or(RuntimeError::MissingValue { line })?
                            .as_integer(line)?;
        let n = i64_to_usize_checked(requested, || RuntimeError::NegativeSize { function: function.to_string(),
                                                                                size: requested,
                                                                                line })?;
        Ok(Self { function,
                  requested,
                  n,
                  line })
    }

    fn too_large(&self) -> RuntimeError {
        RuntimeError::SizeTooLarge { function: self.function.to_string(),
                                     size:     self.requested,
                                     line:     self.line, }
    }

    /// An empty vector with room for `len` values, or an error if the
    /// allocation cannot be made.
    fn buffer(&self, len: usize) -> EvalResult<Vec<Value>> {
        let mut items = Vec::new();
        items.try_reserve_exact(len).map_err(|_| self.too_large())?;
        Ok(items)
    }

    /// Fails unless an `n x n` matrix has a representable element count.
    fn check_square(&self) -> EvalResult<()> {
        match self.n.checked_mul(self.n) {
            Some(_) => Ok(()),
            None => Err(self.too_large()),
        }
    }
}

/// `eye(n)`: the `n x n` identity matrix of floats.
///
/// ```
/// use matlang::interpreter::{evaluator::function::builtin::eye, value::core::Value};
///
/// let identity = eye(&[Value::Integer(2)], 1).unwrap();
/// assert_eq!(identity.to_string(), "[[1, 0], [0, 1]]");
/// ```
pub fn eye(args: &[Value], line: usize) -> EvalResult<Value> {
    let size = Size::read("eye", args, line)?;
    size.check_square()?;

    let mut rows = size.buffer(size.n)?;
    for i in 0..size.n {
        let mut row = size.buffer(size.n)?;
        row.extend((0..size.n).map(|j| Value::Real(if i == j { 1.0 } else { 0.0 })));
        rows.push(Value::from(row));
    }
    Ok(Value::from(rows))
}

/// `zeros(n)`: a vector of `n` float zeros.
///
/// ```
/// use matlang::{
///     error::RuntimeError,
///     interpreter::{evaluator::function::builtin::zeros, value::core::Value},
/// };
///
/// assert_eq!(zeros(&[Value::Integer(2)], 1).unwrap().to_string(), "[0, 0]");
/// assert!(matches!(zeros(&[Value::Integer(i64::MAX)], 1),
///                  Err(RuntimeError::SizeTooLarge { .. })));
/// ```
pub fn zeros(args: &[Value], line: usize) -> EvalResult<Value> {
    let size = Size::read("zeros", args, line)?;
    let mut items = size.buffer(size.n)?;
    items.extend(iter::repeat_n(Value::Real(0.0), size.n));
    Ok(Value::from(items))
}

/// `ones(n)`: an `n x n` matrix of float ones.
pub fn ones(args: &[Value], line: usize) -> EvalResult<Value> {
    let size = Size::read("ones", args, line)?;
    size.check_square()?;

    let mut row = size.buffer(size.n)?;
    row.extend(iter::repeat_n(Value::Real(1.0), size.n));
    let row = Value::from(row);

    let mut rows = size.buffer(size.n)?;
    rows.extend(iter::repeat_n(row, size.n));
    Ok(Value::from(rows))
}
