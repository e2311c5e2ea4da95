use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies `f` to matching elements of two operands.
    ///
    /// Arrays must agree in length at every level; a scalar on either side is
    /// paired with every element of the other.
    pub fn map_array_binary<F>(left: &Value, right: &Value, line: usize, f: &F) -> EvalResult<Value>
        where F: Fn(&Value, &Value) -> EvalResult<Value>
    {
        let elements = match (left, right) {
            (Value::Array(lhs), Value::Array(rhs)) => {
                if lhs.len() != rhs.len() {
                    return Err(RuntimeError::ShapeMismatch { left: left.shape(line)?,
                                                             right: right.shape(line)?,
                                                             line });
                }
                lhs.iter()
                   .zip(rhs.iter())
                   .map(|(l, r)| Self::map_array_binary(l, r, line, f))
                   .collect::<EvalResult<Vec<_>>>()?
            },
            (Value::Array(lhs), scalar) => {
                lhs.iter()
                   .map(|l| Self::map_array_binary(l, scalar, line, f))
                   .collect::<EvalResult<Vec<_>>>()?
            },
            (scalar, Value::Array(rhs)) => {
                rhs.iter()
                   .map(|r| Self::map_array_binary(scalar, r, line, f))
                   .collect::<EvalResult<Vec<_>>>()?
            },
            (l, r) => return f(l, r),
        };
        Ok(Value::from(elements))
    }
}
