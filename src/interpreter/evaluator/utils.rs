use crate::{
    ast::{Expr, VectorLiteral},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::checked_index,
};

impl Context {
    /// Evaluates `[a, b, ...]` into an array.
    pub fn eval_vector(&mut self, vector: &VectorLiteral) -> EvalResult<Value> {
        let mut elements = Vec::with_capacity(vector.elements.len());
        for element in &vector.elements {
            elements.push(self.eval_value(element)?);
        }
        Ok(Value::from(elements))
    }

    /// Evaluates a matrix literal into an array of row arrays.
    pub fn eval_matrix(&mut self, rows: &[VectorLiteral]) -> EvalResult<Value> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(self.eval_vector(row)?);
        }
        Ok(Value::from(out))
    }

    /// Evaluates index expressions, each of which must be an integer.
    pub fn eval_indices(&mut self, indices: &[Expr], line: usize) -> EvalResult<Vec<i64>> {
        indices.iter()
               .map(|index| self.eval_value(index)?.as_integer(line))
               .collect()
    }

    /// Evaluates `target[i, j, ...]`.
    ///
    /// Each index selects along the next axis; fewer indices than dimensions
    /// select a sub-array.
    pub fn eval_subscript(&mut self, target: &Expr, indices: &Expr, line: usize) -> EvalResult<Value> {
        let target = self.eval_value(target)?;
        let Expr::Vector(indices) = indices else {
            return Err(RuntimeError::TypeError { details: "subscript expects an index list".to_string(),
                                                 line });
        };
        let positions = self.eval_indices(&indices.elements, line)?;
        element(&target, &positions, line).cloned()
    }
}

/// Follows `indices` into nested arrays, checking every axis.
///
/// ```
/// use matlang::interpreter::{evaluator::utils::element, value::core::Value};
///
/// let matrix = Value::from(vec![Value::from(vec![Value::Integer(1), Value::Integer(2)]),
///                               Value::from(vec![Value::Integer(3), Value::Integer(4)])]);
/// assert_eq!(element(&matrix, &[1, 0], 1).unwrap(), &Value::Integer(3));
/// assert!(element(&matrix, &[0, 2], 1).is_err());
/// ```
pub fn element<'v>(value: &'v Value, indices: &[i64], line: usize) -> EvalResult<&'v Value> {
    let mut current = value;
    for (axis, &index) in indices.iter().enumerate() {
        let Value::Array(items) = current else {
            return Err(RuntimeError::TooManyIndices { found: indices.len(),
                                                      rank: axis,
                                                      line });
        };
        current = &items[checked_index(index, axis, items.len(), line)?];
    }
    Ok(current)
}
