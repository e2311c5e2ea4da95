use std::rc::Rc;

use crate::{
    ast::{AssignOperator, Expr, LValue, StatementList},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            control::Flow,
            core::{Context, EvalResult},
        },
        scope::FrameKind,
        value::core::Value,
    },
    util::num::checked_index,
};

impl Context {
    /// Runs the `if` or `else` body inside an `if` frame.
    pub fn exec_if(&mut self,
                   condition: &Expr,
                   block: &StatementList,
                   else_block: Option<&StatementList>,
                   line: usize)
                   -> EvalResult<Flow> {
        let taken = if self.eval_value(condition)?.is_truthy(line)? {
            block
        } else if let Some(else_block) = else_block {
            else_block
        } else {
            return Ok(Flow::Normal);
        };

        self.scoped(FrameKind::If, |ctx| ctx.exec_list(taken))
    }

    /// Runs a `while` loop. One `while` frame spans all iterations.
    pub fn exec_while(&mut self,
                      condition: &Expr,
                      block: &StatementList,
                      line: usize)
                      -> EvalResult<Flow> {
        self.scoped(FrameKind::While, |ctx| {
                while ctx.eval_value(condition)?.is_truthy(line)? {
                    match ctx.exec_list(block)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {},
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            })
    }

    /// Runs a `for` loop over `start:end`, end exclusive.
    ///
    /// The range is evaluated once, before the loop frame opens. The iterator
    /// is bound in the `for` frame, so it shadows any outer variable of the
    /// same name and disappears when the loop ends.
    pub fn exec_for(&mut self,
                    iterator: &str,
                    range: &Expr,
                    block: &StatementList,
                    line: usize)
                    -> EvalResult<Flow> {
        let (start, end) = match self.eval_value(range)? {
            Value::Range { start, end } => (start, end),
            other => {
                return Err(RuntimeError::TypeError { details: format!("for loop expects a range, got {}",
                                                                      other.type_name()),
                                                     line });
            },
        };

        self.scoped(FrameKind::For, |ctx| {
                for i in start..end {
                    ctx.memory.bind_local(iterator, Value::Integer(i));
                    match ctx.exec_list(block)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {},
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            })
    }

    /// Stores the value of an assignment.
    ///
    /// A plain identifier is overwritten where it is bound, or bound in the
    /// innermost frame when it is new. A subscript writes one element (or a
    /// whole sub-array) in place. Compound operators combine the current
    /// contents with the right-hand side first.
    pub fn exec_assign(&mut self,
                       target: &LValue,
                       op: AssignOperator,
                       value: &Expr,
                       line: usize)
                       -> EvalResult<()> {
        let rhs = self.eval_value(value)?;

        match target {
            LValue::Identifier { name, .. } => {
                let new = match op.binary() {
                    None => rhs,
                    Some(binary) => Self::eval_binary(binary, &self.lookup(name, line)?, &rhs, line)?,
                };
                self.memory.assign(name, new);
                Ok(())
            },
            LValue::Subscript { name, indices, .. } => {
                let positions = self.eval_indices(&indices.elements, line)?;
                let slot =
                    self.memory
                        .lookup_mut(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                       line })?;
                let element = element_mut(slot, &positions, 0, line)?;
                *element = match op.binary() {
                    None => rhs,
                    Some(binary) => Self::eval_binary(binary, element, &rhs, line)?,
                };
                Ok(())
            },
            LValue::Invalid(expr) => {
                Err(RuntimeError::TypeError { details: "invalid assignment target".to_string(),
                                              line: expr.line() })
            },
        }
    }
}

/// Walks `indices` into nested arrays, cloning shared storage on the way.
fn element_mut<'v>(value: &'v mut Value,
                   indices: &[i64],
                   axis: usize,
                   line: usize)
                   -> EvalResult<&'v mut Value> {
    let Some((&index, rest)) = indices.split_first() else {
        return Ok(value);
    };
    let Value::Array(items) = value else {
        return Err(RuntimeError::TooManyIndices { found: axis + indices.len(),
                                                  rank: axis,
                                                  line });
    };
    let position = checked_index(index, axis, items.len(), line)?;
    element_mut(&mut Rc::make_mut(items)[position], rest, axis + 1, line)
}
