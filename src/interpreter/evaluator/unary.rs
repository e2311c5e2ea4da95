use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies `-` or `'` to an evaluated operand.
    ///
    /// ```
    /// use matlang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let row = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let matrix = Value::from(vec![row]);
    /// let column = Context::eval_unary(UnaryOperator::Transpose, &matrix, 1).unwrap();
    /// assert_eq!(column.to_string(), "[[1], [2]]");
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => negate(value, line),
            UnaryOperator::Transpose => transpose(value, line),
        }
    }
}

/// Negates a number, or every number in an array.
fn negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => n.checked_neg()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { line }),
        Value::Real(r) => Ok(Value::Real(-r)),
        Value::Array(items) => {
            let negated = items.iter()
                               .map(|item| negate(item, line))
                               .collect::<EvalResult<Vec<_>>>()?;
            Ok(Value::from(negated))
        },
        _ => Err(RuntimeError::ExpectedNumber { line }),
    }
}

/// Reverses the axes of an array.
///
/// Scalars and vectors come back unchanged; an `m x n` matrix becomes
/// `n x m`.
fn transpose(value: &Value, line: usize) -> EvalResult<Value> {
    let shape = value.shape(line)?;
    if shape.len() < 2 {
        return Ok(value.clone());
    }

    let reversed: Vec<usize> = shape.iter().rev().copied().collect();
    let mut path = Vec::with_capacity(reversed.len());
    gather(value, &reversed, &mut path, line)
}

/// Builds the transposed array along `shape`, reading each element from the
/// source at the reversed index path.
fn gather(source: &Value, shape: &[usize], path: &mut Vec<usize>, line: usize) -> EvalResult<Value> {
    let depth = path.len();
    if depth == shape.len() {
        let mut current = source;
        for &index in path.iter().rev() {
            current = match current {
                Value::Array(items) => items.get(index),
                _ => None,
            }.ok_or(RuntimeError::ExpectedArray { line })?;
        }
        return Ok(current.clone());
    }

    let mut out = Vec::with_capacity(shape[depth]);
    for index in 0..shape[depth] {
        path.push(index);
        out.push(gather(source, shape, path, line)?);
        path.pop();
    }
    Ok(Value::from(out))
}
