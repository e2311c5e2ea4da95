use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::invalid_operands,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Compares two scalars.
    ///
    /// Numbers compare by value across integers and floats; booleans and
    /// strings compare with their own kind. A NaN operand makes every
    /// comparison false except `!=`.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Bool, Integer, Real, Str};

        let ordering = match (left, right) {
            (Integer(a), Integer(b)) => a.partial_cmp(b),
            (Integer(_) | Real(_), Integer(_) | Real(_)) => {
                left.as_real(line)?.partial_cmp(&right.as_real(line)?)
            },
            (Bool(a), Bool(b)) => a.partial_cmp(b),
            (Str(a), Str(b)) => a.partial_cmp(b),
            _ => return Err(invalid_operands(op, left, right, line)),
        };

        let result = match op {
            BinaryOperator::Equal => ordering == Some(Ordering::Equal),
            BinaryOperator::NotEqual => ordering != Some(Ordering::Equal),
            BinaryOperator::Less => ordering == Some(Ordering::Less),
            BinaryOperator::Greater => ordering == Some(Ordering::Greater),
            BinaryOperator::LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            BinaryOperator::GreaterEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            _ => return Err(invalid_operands(op, left, right, line)),
        };

        Ok(Value::Bool(result))
    }
}
