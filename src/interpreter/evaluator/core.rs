use std::io::{self, Write};

use crate::{
    ast::{BinaryOperator, ControlKind, Expr, LiteralValue, Statement, StatementList},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            control::{Flow, Outcome},
            memory::Memory,
        },
        scope::FrameKind,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the memory stack of variable
/// frames and the sink that `print` and the memory dump write to.
///
/// ## Usage
///
/// A `Context` runs one program with [`Context::interpret`]. Tests pass any
/// writer to [`Context::with_output`] to capture what the program prints.
pub struct Context {
    /// Every open frame of variables, the global one first.
    pub memory:     Memory,
    pub(crate) out: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Creates a context that prints to `out`.
    #[must_use]
    pub fn with_output(out: impl Write + 'static) -> Self {
        Self { memory: Memory::new(),
               out:    Box::new(out), }
    }

    /// Runs a whole program.
    ///
    /// # Returns
    /// [`Outcome::Returned`] when a top-level `return` stopped the program,
    /// [`Outcome::Completed`] otherwise.
    ///
    /// # Errors
    /// The first runtime error aborts the program.
    ///
    /// ```
    /// use matlang::{
    ///     interpreter::evaluator::{control::Outcome, core::Context},
    ///     interpreter::value::core::Value,
    ///     parse,
    /// };
    ///
    /// let program = parse("x = 2; return x * 3;").unwrap();
    /// let mut context = Context::with_output(Vec::new());
    /// assert_eq!(context.interpret(&program).unwrap(), Outcome::Returned(Value::Integer(6)));
    /// ```
    pub fn interpret(&mut self, program: &StatementList) -> EvalResult<Outcome> {
        let flow = self.exec_list(program)?;
        self.out.flush()?;
        match flow {
            Flow::Return(value) => Ok(Outcome::Returned(value)),
            Flow::Normal | Flow::Break | Flow::Continue => Ok(Outcome::Completed),
        }
    }

    /// Runs `f` inside a fresh frame of the given kind.
    ///
    /// The frame is closed whether `f` succeeds, fails, or transfers control.
    pub fn scoped<T>(&mut self,
                     kind: FrameKind,
                     f: impl FnOnce(&mut Self) -> EvalResult<T>)
                     -> EvalResult<T> {
        self.memory.push(kind);
        let result = f(self);
        self.memory.pop();
        result
    }

    /// Executes statements in order until one of them transfers control.
    pub fn exec_list(&mut self, list: &StatementList) -> EvalResult<Flow> {
        for statement in &list.statements {
            let flow = self.exec_statement(statement)?;
            if !flow.is_normal() {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::List(list) => self.exec_list(list),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
            Statement::Assign { target,
                                op,
                                value,
                                line, } => {
                self.exec_assign(target, *op, value, *line)?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            block,
                            else_block,
                            line, } => self.exec_if(condition, block, else_block.as_ref(), *line),
            Statement::While { condition,
                               block,
                               line, } => self.exec_while(condition, block, *line),
            Statement::For { iterator,
                             range,
                             block,
                             line, } => self.exec_for(iterator, range, block, *line),
            Statement::Return { value, .. } => Ok(Flow::Return(self.eval_value(value)?)),
            Statement::Control { kind, line } => {
                if !self.memory.is_inside_loop() {
                    return Err(RuntimeError::ControlOutsideLoop { statement: kind.to_string(),
                                                                  line:      *line, });
                }
                Ok(match kind {
                       ControlKind::Break => Flow::Break,
                       ControlKind::Continue => Flow::Continue,
                   })
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. It returns
    /// `None` only for calls that produce nothing, such as `print(...)`.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        let value = match expr {
            Expr::Literal { value, .. } => match value {
                LiteralValue::Integer(n) => Value::Integer(*n),
                LiteralValue::Real(r) => Value::Real(*r),
            },
            Expr::StringLiteral { value, .. } => Value::Str(unquote(value).into()),
            Expr::Identifier { name, line } => self.lookup(name, *line)?,
            Expr::Vector(vector) => self.eval_vector(vector)?,
            Expr::Matrix { rows, .. } => self.eval_matrix(rows)?,
            Expr::FunctionCall { function,
                                 arguments,
                                 line, } => return self.eval_function_call(*function, arguments, *line),
            Expr::BinaryOp { left,
                             op: BinaryOperator::Subscript,
                             right,
                             line, } => self.eval_subscript(left, right, *line)?,
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval_value(left)?;
                let right = self.eval_value(right)?;
                Self::eval_binary(*op, &left, &right, *line)?
            },
            Expr::UnaryOp { op, operand, line } => {
                let operand = self.eval_value(operand)?;
                Self::eval_unary(*op, &operand, *line)?
            },
        };
        Ok(Some(value))
    }

    /// Evaluates an expression that must produce a value.
    pub fn eval_value(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue { line: expr.line() })
    }

    /// Reads a variable from the innermost frame that binds it.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.memory
            .lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}

/// The contents of a quoted string literal.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
