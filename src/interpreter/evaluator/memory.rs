use std::io::Write;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    scope::ScopeChain,
    value::core::Value,
};

/// Variables visible at runtime, one frame per open block.
pub type Memory = ScopeChain<Value>;

impl Context {
    /// Writes every open frame as `kind {name: value, ...}`, one per line,
    /// starting with the global frame.
    ///
    /// ```
    /// use matlang::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.memory.assign("b", Value::Integer(2));
    /// context.memory.assign("a", Value::from(vec![Value::Integer(1)]));
    /// context.dump_memory().unwrap();
    /// ```
    pub fn dump_memory(&mut self) -> EvalResult<()> {
        for frame in self.memory.frames() {
            writeln!(self.out, "{frame}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
