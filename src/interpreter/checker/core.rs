use crate::{
    ast::{AssignOperator, BinaryOperator, Expr, LValue, Statement, StatementList, VectorLiteral},
    error::TypeError,
    interpreter::{
        checker::symbol::{BaseType, Checked, Symbol, SymbolTable},
        scope::FrameKind,
    },
};

/// Checks a program before it runs.
///
/// The checker never stops at the first problem: each violation is recorded
/// and checking continues with the next construct. An expression whose error
/// was already reported checks as [`Checked::Unknown`], which keeps one
/// mistake from producing a cascade of diagnostics.
///
/// ```
/// use matlang::{interpreter::checker::core::TypeChecker, parse};
///
/// let program = parse("a = [1, 2]; b = a + 1.5;").unwrap();
/// let mut checker = TypeChecker::new();
/// assert_eq!(checker.check(&program), 1);
/// ```
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub(in crate::interpreter::checker) symbols: SymbolTable,
    errors:                                      Vec<TypeError>,
}

impl TypeChecker {
    /// Creates a checker with an empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a whole program and returns the number of errors found.
    pub fn check(&mut self, program: &StatementList) -> usize {
        self.check_list(program);
        self.errors.len()
    }

    /// The diagnostics reported so far, in program order.
    #[must_use]
    pub fn errors(&self) -> &[TypeError] {
        &self.errors
    }

    /// Consumes the checker, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<TypeError> {
        self.errors
    }

    /// The symbol table. After a check only the global frame is open.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub(in crate::interpreter::checker) fn report(&mut self, error: TypeError) {
        self.errors.push(error);
    }

    fn check_list(&mut self, list: &StatementList) {
        for statement in &list.statements {
            self.check_statement(statement);
        }
    }

    /// Runs `f` inside a fresh frame of the given kind.
    fn scoped(&mut self, kind: FrameKind, f: impl FnOnce(&mut Self)) {
        self.symbols.push(kind);
        f(self);
        self.symbols.pop();
    }

    fn check_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::List(list) => self.check_list(list),
            Statement::Expression { expr, .. } => {
                self.check_expr(expr);
            },
            Statement::Assign { target,
                                op,
                                value,
                                line, } => self.check_assignment(target, *op, value, *line),
            Statement::If { condition,
                            block,
                            else_block,
                            .. } => {
                self.check_value(condition);
                self.scoped(FrameKind::If, |checker| checker.check_list(block));
                if let Some(else_block) = else_block {
                    self.scoped(FrameKind::If, |checker| checker.check_list(else_block));
                }
            },
            Statement::While { condition, block, .. } => {
                self.check_value(condition);
                self.scoped(FrameKind::While, |checker| checker.check_list(block));
            },
            Statement::For { iterator,
                             range,
                             block,
                             line, } => {
                self.check_for_header(range, *line);
                self.scoped(FrameKind::For, |checker| {
                        if checker.symbols.define(iterator, Symbol::scalar(BaseType::Int)).is_err() {
                            checker.report(TypeError::Redefinition { name: iterator.clone(),
                                                                     line: *line, });
                        }
                        checker.check_list(block);
                    });
            },
            Statement::Return { value, .. } => {
                self.check_value(value);
            },
            Statement::Control { kind, line } => {
                if !self.symbols.is_inside_loop() {
                    self.report(TypeError::ControlOutsideLoop { statement: kind.to_string(),
                                                                line:      *line, });
                }
            },
        }
    }

    /// A `for` header must be `start:end` with integer scalar bounds.
    fn check_for_header(&mut self, range: &Expr, line: usize) {
        if let Expr::BinaryOp { left,
                                op: BinaryOperator::Range,
                                right,
                                line, } = range
        {
            for bound in [left, right] {
                if let Some(symbol) = self.check_value(bound)
                   && !symbol.is_scalar_of(BaseType::Int)
                {
                    self.report(TypeError::ExpectedIntegerBound { found: symbol,
                                                                  line:  *line, });
                }
            }
            return;
        }

        self.check_expr(range);
        self.report(TypeError::ForExpectsRange { line });
    }

    fn check_assignment(&mut self, target: &LValue, op: AssignOperator, value: &Expr, line: usize) {
        let rhs = self.check_value(value);

        match target {
            LValue::Invalid(expr) => {
                self.report(TypeError::InvalidAssignmentTarget { line: expr.line() });
            },
            LValue::Identifier { name, .. } => {
                let current = self.symbols.lookup(name).cloned();
                match (current, rhs) {
                    (None, _) if op != AssignOperator::Assign => {
                        self.report(TypeError::UnknownIdentifier { name: name.clone(),
                                                                   line });
                    },
                    (None, Some(rhs)) => {
                        if self.symbols.define(name, rhs).is_err() {
                            self.report(TypeError::Redefinition { name: name.clone(),
                                                                  line });
                        }
                    },
                    (Some(current), Some(rhs)) => {
                        self.check_store(name.clone(), &current, rhs, line);
                    },
                    (_, None) => {},
                }
            },
            LValue::Subscript { name, indices, line } => {
                if let Some(element) = self.check_subscript(name, indices, *line)
                   && let Some(rhs) = rhs
                {
                    self.check_store(format!("{name}[...]"), &element, rhs, *line);
                }
            },
        }
    }

    /// Every assignment form must leave the slot's symbol unchanged, so the
    /// right-hand side is compared with the target directly.
    fn check_store(&mut self, name: String, current: &Symbol, rhs: Symbol, line: usize) {
        if &rhs != current {
            self.report(TypeError::AssignmentMismatch { name,
                                                        expected: current.clone(),
                                                        found: rhs,
                                                        line });
        }
    }

    /// Checks `name[indices]`, which selects one element of `name`'s base
    /// type. The indices are checked for their own errors only.
    pub(in crate::interpreter::checker) fn check_subscript(&mut self,
                                                           name: &str,
                                                           indices: &VectorLiteral,
                                                           line: usize)
                                                           -> Option<Symbol> {
        let valid = self.check_elements(&indices.elements).is_some();
        let Some(base) = self.symbols.lookup(name).map(|target| target.base) else {
            self.report(TypeError::UnknownIdentifier { name: name.to_string(),
                                                       line });
            return None;
        };
        valid.then(|| Symbol::scalar(base))
    }

    /// Checks an expression whose value is needed. `print(...)` is reported
    /// here; other failures were reported while checking the expression.
    pub(in crate::interpreter::checker) fn check_value(&mut self, expr: &Expr) -> Option<Symbol> {
        match self.check_expr(expr) {
            Checked::Known(symbol) => Some(symbol),
            Checked::Unknown => None,
            Checked::Void => {
                self.report(TypeError::VoidValue { line: expr.line() });
                None
            },
        }
    }
}
