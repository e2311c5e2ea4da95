use crate::{
    ast::{BinaryOperator, Builtin, Expr, LiteralValue, UnaryOperator, VectorLiteral},
    error::TypeError,
    interpreter::checker::{
        core::TypeChecker,
        symbol::{BaseType, Checked, Symbol},
    },
};

impl TypeChecker {
    /// Computes the static type of an expression, reporting every rule it
    /// violates.
    pub fn check_expr(&mut self, expr: &Expr) -> Checked {
        match expr {
            Expr::Literal { value, .. } => match value {
                LiteralValue::Integer(_) => Symbol::scalar(BaseType::Int).into(),
                LiteralValue::Real(_) => Symbol::scalar(BaseType::Float).into(),
            },
            Expr::StringLiteral { .. } => Symbol::scalar(BaseType::Str).into(),
            Expr::Identifier { name, line } => match self.symbols.lookup(name) {
                Some(symbol) => symbol.clone().into(),
                None => {
                    self.report(TypeError::UnknownIdentifier { name: name.clone(),
                                                               line: *line, });
                    Checked::Unknown
                },
            },
            Expr::Vector(vector) => self.check_vector(vector),
            Expr::Matrix { rows, .. } => self.check_matrix(rows),
            Expr::FunctionCall { function,
                                 arguments,
                                 line, } => self.check_call(*function, arguments, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.check_binary(left, *op, right, *line),
            Expr::UnaryOp { op, operand, .. } => {
                let Some(symbol) = self.check_value(operand) else {
                    return Checked::Unknown;
                };
                match op {
                    UnaryOperator::Negate => symbol.into(),
                    UnaryOperator::Transpose => {
                        let mut shape = symbol.shape;
                        shape.reverse();
                        Symbol::new(symbol.base, shape).into()
                    },
                }
            },
        }
    }

    /// All elements must share one symbol; the count is prepended to its
    /// shape, so `[1, 2, 3]` is `int(3, 1)`.
    fn check_vector(&mut self, vector: &VectorLiteral) -> Checked {
        let Some(elements) = self.check_elements(&vector.elements) else {
            return Checked::Unknown;
        };
        let Some(first) = elements.first() else {
            return Symbol::new(BaseType::Float, vec![0]).into();
        };
        if elements.iter().any(|symbol| symbol != first) {
            self.report(TypeError::InconsistentElements { line: vector.line });
            return Checked::Unknown;
        }

        let mut shape = Vec::with_capacity(first.shape.len() + 1);
        shape.push(elements.len());
        shape.extend_from_slice(&first.shape);
        Symbol::new(first.base, shape).into()
    }

    /// Rows must hold scalars of one symbol and all have the same length.
    fn check_matrix(&mut self, rows: &[VectorLiteral]) -> Checked {
        let mut base = None;
        let mut width = None;
        let mut valid = true;

        for row in rows {
            let Some(elements) = self.check_elements(&row.elements) else {
                valid = false;
                continue;
            };
            if elements.iter().any(|symbol| !symbol.is_scalar()) {
                self.report(TypeError::NonScalarMatrixElement { line: row.line });
                valid = false;
                continue;
            }
            let consistent_base =
                elements.iter().all(|symbol| *base.get_or_insert(symbol.base) == symbol.base);
            let consistent_width = *width.get_or_insert(elements.len()) == elements.len();
            if !consistent_base || !consistent_width {
                self.report(TypeError::InconsistentElements { line: row.line });
                valid = false;
            }
        }

        if !valid {
            return Checked::Unknown;
        }
        Symbol::new(base.unwrap_or(BaseType::Float), vec![rows.len(), width.unwrap_or(0)]).into()
    }

    /// Checks every element; `None` if any of them failed.
    pub(in crate::interpreter::checker) fn check_elements(&mut self, elements: &[Expr]) -> Option<Vec<Symbol>> {
        let mut symbols = Vec::with_capacity(elements.len());
        let mut valid = true;
        for element in elements {
            match self.check_value(element) {
                Some(symbol) => symbols.push(symbol),
                None => valid = false,
            }
        }
        valid.then_some(symbols)
    }

    fn check_call(&mut self, function: Builtin, arguments: &[Expr], line: usize) -> Checked {
        if function == Builtin::Print {
            for argument in arguments {
                self.check_value(argument);
            }
            return Checked::Void;
        }

        let [argument] = arguments else {
            for argument in arguments {
                self.check_value(argument);
            }
            self.report(TypeError::BuiltinArity { function: function.to_string(),
                                                  found: arguments.len(),
                                                  line });
            return Checked::Unknown;
        };

        let Some(size) = literal_size(argument) else {
            self.check_value(argument);
            self.report(TypeError::BuiltinSize { function: function.to_string(),
                                                 line });
            return Checked::Unknown;
        };

        // `zeros(n)` evaluates to a vector but checks as square like the others.
        Symbol::new(BaseType::Float, vec![size, size]).into()
    }

    fn check_binary(&mut self, left: &Expr, op: BinaryOperator, right: &Expr, line: usize) -> Checked {
        match op {
            BinaryOperator::Subscript => {
                let (Expr::Identifier { name, .. }, Expr::Vector(indices)) = (left, right) else {
                    self.check_value(left);
                    self.report(TypeError::InvalidSubscriptTarget { line });
                    return Checked::Unknown;
                };
                self.check_subscript(name, indices, line).map_or(Checked::Unknown, Checked::Known)
            },
            BinaryOperator::Range => {
                self.check_value(left);
                self.check_value(right);
                self.report(TypeError::RangeOutsideFor { line });
                Checked::Unknown
            },
            _ => {
                let l = self.check_value(left);
                let r = self.check_value(right);
                let (Some(l), Some(r)) = (l, r) else {
                    return Checked::Unknown;
                };
                self.check_binary_symbols(op, &l, &r, line)
                    .map_or(Checked::Unknown, Checked::Known)
            },
        }
    }

    /// The typing rule of a binary operator applied to two known symbols.
    ///
    /// Reports a diagnostic and returns `None` when the rule is violated.
    fn check_binary_symbols(&mut self,
                            op: BinaryOperator,
                            l: &Symbol,
                            r: &Symbol,
                            line: usize)
                            -> Option<Symbol> {
        match op {
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::DotAdd
            | BinaryOperator::DotSub
            | BinaryOperator::DotMul
            | BinaryOperator::DotDiv
            | BinaryOperator::Equal
            | BinaryOperator::NotEqual => {
                if l == r {
                    return Some(l.clone());
                }
                self.report(TypeError::MismatchedOperands { op: op.to_string(),
                                                            left: l.clone(),
                                                            right: r.clone(),
                                                            line });
                None
            },
            BinaryOperator::Mul => self.check_matmul(l, r, line),
            BinaryOperator::Div
            | BinaryOperator::Greater
            | BinaryOperator::GreaterEqual
            | BinaryOperator::Less
            | BinaryOperator::LessEqual => {
                if let Some(found) = [l, r].into_iter().find(|operand| !operand.is_scalar()) {
                    self.report(TypeError::ExpectedScalar { op: op.to_string(),
                                                            found: found.clone(),
                                                            line });
                    return None;
                }
                Some(Symbol::scalar(BaseType::Bool))
            },
            _ if op.is_logical() => {
                if let Some(found) =
                    [l, r].into_iter().find(|operand| !operand.is_scalar_of(BaseType::Bool))
                {
                    self.report(TypeError::ExpectedBool { op: op.to_string(),
                                                          found: found.clone(),
                                                          line });
                    return None;
                }
                Some(Symbol::scalar(BaseType::Bool))
            },
            _ => None,
        }
    }

    /// `*` multiplies matrices: the last dimension of the left operand must
    /// match the first of the right, giving `(left[0], right[-1])`.
    fn check_matmul(&mut self, l: &Symbol, r: &Symbol, line: usize) -> Option<Symbol> {
        if l.base != r.base {
            self.report(TypeError::MismatchedBaseTypes { op: BinaryOperator::Mul.to_string(),
                                                         left: l.clone(),
                                                         right: r.clone(),
                                                         line });
            return None;
        }

        let (Some(&rows), Some(inner_l), Some(inner_r), Some(&columns)) =
            (l.shape.first(), l.shape.last(), r.shape.first(), r.shape.last())
        else {
            return None;
        };
        if inner_l != inner_r {
            self.report(TypeError::IncompatibleShapes { left:  l.clone(),
                                                        right: r.clone(),
                                                        line });
            return None;
        }
        Some(Symbol::new(l.base, vec![rows, columns]))
    }
}

/// The size a built-in call asks for, when it is a non-negative integer
/// literal.
fn literal_size(argument: &Expr) -> Option<usize> {
    match argument {
        Expr::Literal { value: LiteralValue::Integer(n),
                        .. } => usize::try_from(*n).ok(),
        _ => None,
    }
}
