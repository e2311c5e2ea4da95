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
    /// `and`, `or` and `xor` on two booleans. Both sides are always evaluated.
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{And, Or, Xor};

        let (l, r) = (left.as_bool(line)?, right.as_bool(line)?);
        match op {
            And => Ok(Value::Bool(l && r)),
            Xor => Ok(Value::Bool(l ^ r)),
            Or => Ok(Value::Bool(l || r)),
            _ => Err(invalid_operands(op, left, right, line)),
        }
    }
}
