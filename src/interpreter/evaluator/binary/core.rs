use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// `+`, `-` and the dotted operators work element-wise, broadcasting a
    /// scalar over an array. `*` is a matrix product when both operands are
    /// arrays and scaling otherwise. `/` divides element-wise as well.
    /// Comparisons are element-wise and produce booleans.
    ///
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let doubled = Context::eval_binary(BinaryOperator::DotMul, &v, &Value::Integer(2), 1).unwrap();
    /// assert_eq!(doubled.to_string(), "[2, 4]");
    /// let dot = Context::eval_binary(BinaryOperator::Mul, &v, &v, 1).unwrap();
    /// assert_eq!(dot, Value::Integer(5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, DotAdd, DotDiv, DotMul, DotSub, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mul, NotEqual, Or, Range, Sub, Subscript, Xor,
        };

        match op {
            Add | Sub | DotAdd | DotSub | DotMul | Div | DotDiv => {
                Self::map_array_binary(left, right, line, &|l, r| {
                    Self::eval_scalar_op(op, l, r, line)
                })
            },

            Mul if left.is_array() && right.is_array() => Self::eval_matmul(left, right, line),
            Mul => Self::map_array_binary(left, right, line, &|l, r| {
                Self::eval_scalar_op(op, l, r, line)
            }),

            Equal | NotEqual | Greater | GreaterEqual | Less | LessEqual => {
                Self::map_array_binary(left, right, line, &|l, r| {
                    Self::eval_comparison(op, l, r, line)
                })
            },

            And | Or | Xor => Self::eval_logic(op, left, right, line),

            Range => Ok(Value::Range { start: left.as_integer(line)?,
                                       end:   right.as_integer(line)?, }),

            Subscript => {
                Err(RuntimeError::TypeError { details: "subscript is not an arithmetic operator".to_string(),
                                              line })
            },
        }
    }
}

/// The error for operands an operator does not accept.
pub fn invalid_operands(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply {op} to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
