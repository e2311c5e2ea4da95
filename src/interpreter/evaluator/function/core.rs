use crate::{
    ast::{Builtin, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin,
        },
        value::core::Value,
    },
};

type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// The value-producing built-ins, with the number of arguments each takes.
const fn builtin_table(function: Builtin) -> Option<(usize, BuiltinFn)> {
    match function {
        Builtin::Eye => Some((1, builtin::eye)),
        Builtin::Zeros => Some((1, builtin::zeros)),
        Builtin::Ones => Some((1, builtin::ones)),
        Builtin::Print => None,
    }
}

impl Context {
    /// Evaluates the arguments left to right and calls the built-in.
    ///
    /// # Returns
    /// `None` for `print`, which produces no value.
    pub fn eval_function_call(&mut self,
                              function: Builtin,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_value(argument)?);
        }

        let Some((arity, func)) = builtin_table(function) else {
            self.print(&args)?;
            return Ok(None);
        };

        check_arity(function, &args, arity, line)?;
        func(&args, line).map(Some)
    }
}

fn check_arity(function: Builtin, args: &[Value], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() != expected {
        return Err(RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                         expected,
                                                         found: args.len(),
                                                         line });
    }
    Ok(())
}
