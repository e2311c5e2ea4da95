use std::io::Write;

use crate::interpreter::{
    evaluator::core::{Context, EvalResult},
    value::core::Value,
};

impl Context {
    /// Writes the arguments on one line, separated by single spaces.
    pub fn print(&mut self, args: &[Value]) -> EvalResult<()> {
        for (i, value) in args.iter().enumerate() {
            if i > 0 {
                write!(self.out, " ")?;
            }
            write!(self.out, "{value}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
