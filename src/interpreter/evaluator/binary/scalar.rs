use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::invalid_operands,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Arithmetic on two numbers.
    ///
    /// Two integers stay integers, with overflow reported. Any float operand
    /// makes the result a float. Division always produces a float.
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, DotAdd, DotDiv, DotMul, DotSub, Mul, Sub};
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(a), Integer(b)) if !matches!(op, Div | DotDiv) => {
                let result = match op {
                    Add | DotAdd => a.checked_add(*b),
                    Sub | DotSub => a.checked_sub(*b),
                    Mul | DotMul => a.checked_mul(*b),
                    _ => return Err(invalid_operands(op, left, right, line)),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;

                Ok(Real(match op {
                            Add | DotAdd => a + b,
                            Sub | DotSub => a - b,
                            Mul | DotMul => a * b,
                            Div | DotDiv => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                            _ => return Err(invalid_operands(op, left, right, line)),
                        }))
            },
            _ => Err(invalid_operands(op, left, right, line)),
        }
    }
}
